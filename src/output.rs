//! Output formatting for human and JSON modes
//!
//! This module provides the readiness report that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckId, CheckOutcome, CheckReport};
use crate::core::services::ReadinessSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

const RULE: &str = "==================================================";

/// Result of a full readiness run
#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    /// Directory that was checked
    pub site_dir: String,
    /// Every check, in run order
    pub checks: Vec<CheckReport>,
    /// Pass count and verdict
    pub summary: ReadinessSummary,
    /// When the run finished, as printed
    pub prepared_at: String,
}

impl ReadinessReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    /// Pretty JSON for `--json`, including the deployment instructions
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            report: self,
            deployment_instructions: &DEPLOYMENT_INSTRUCTIONS,
        })
    }

    fn render_human(&self) {
        println!("PORTFOLIO DEPLOYMENT PREPARATION");
        println!("{RULE}");
        println!("Preparing the portfolio in {} for deployment...", self.site_dir);

        let total = self.checks.len();
        for (index, check) in self.checks.iter().enumerate() {
            println!("\n[{}/{total}] {}...", index + 1, check.id.title());
            render_check(check);
        }

        println!(
            "\nDEPLOYMENT READINESS: {}/{} checks passed",
            self.summary.passed, self.summary.total
        );
        println!("{}", self.summary.tier.message());

        print_deployment_instructions();

        println!("\nPortfolio prepared on {}", self.prepared_at);
    }

}

fn render_check(check: &CheckReport) {
    for item in &check.items {
        let marker = if item.ok { "✓".green() } else { "✗".red() };
        match &item.detail {
            Some(detail) => println!("  {marker} {} - {detail}", item.label),
            None => println!("  {marker} {}", item.label),
        }
    }

    match &check.outcome {
        CheckOutcome::Passed => {
            if let Some(line) = success_line(check.id) {
                println!("  {}", line.green());
            }
        },
        CheckOutcome::Skipped { reason } => println!("  {} {reason}", "-".yellow()),
        CheckOutcome::Failed { reason } => {
            println!("  {} {reason}", "!".yellow());
            if let Some(hint) = check.id.hint() {
                println!("  {hint}");
            }
        },
    }
}

const fn success_line(id: CheckId) -> Option<&'static str> {
    match id {
        CheckId::RequiredFiles => Some("All required files are present!"),
        CheckId::HtmlStructure => Some("HTML structure looks good!"),
        _ => None,
    }
}

/// Deployment steps for one hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostingGuide {
    /// Platform name
    pub platform: &'static str,
    /// Steps in order
    pub steps: &'static [&'static str],
}

/// Deployment steps for every supported hosting platform
pub const DEPLOYMENT_INSTRUCTIONS: [HostingGuide; 4] = [
    HostingGuide {
        platform: "GitHub Pages",
        steps: &[
            "Push all files to your GitHub repository",
            "Go to Settings > Pages in your repository",
            "Select source branch (main/master)",
            "Your site will be live at: https://yourusername.github.io/repository-name",
        ],
    },
    HostingGuide {
        platform: "Netlify",
        steps: &[
            "Drag and drop the project folder to netlify.com/drop",
            "Or connect your GitHub repository for continuous deployment",
            "Custom domain can be configured in site settings",
        ],
    },
    HostingGuide {
        platform: "Vercel",
        steps: &[
            "Install Vercel CLI: npm i -g vercel",
            "Run 'vercel' in the project directory",
            "Follow the prompts for deployment",
        ],
    },
    HostingGuide {
        platform: "Traditional Hosting",
        steps: &[
            "Upload all files to your web hosting via FTP",
            "Ensure index.html is in the root directory",
            "Test all links and functionality",
        ],
    },
];

/// Print deployment steps for the supported hosting platforms
pub fn print_deployment_instructions() {
    println!("\nDEPLOYMENT INSTRUCTIONS");
    println!("{RULE}");

    for guide in &DEPLOYMENT_INSTRUCTIONS {
        println!("\n{}:", guide.platform);
        for (index, step) in guide.steps.iter().enumerate() {
            println!("{}. {step}", index + 1);
        }
    }
}

/// JSON document: the report plus the static instructions
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ReadinessReport,
    deployment_instructions: &'static [HostingGuide],
}
