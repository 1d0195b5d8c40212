//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands::{self, DeployOptions};
use portfolio_kit::output::OutputMode;

/// portfolio-deploy - Deployment readiness checks for the portfolio site
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-deploy",
    version,
    about = "Deployment readiness checks for the portfolio site",
    long_about = "Check that the portfolio site is ready to deploy.\n\n\
                  Runs six independent checks (required files, resume generation, HTML \
                  structure, placeholder links, placeholder images, deployment info), writes \
                  deployment-info.json and prints deployment instructions."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 unless every check passes
    #[arg(long)]
    pub strict: bool,

    /// Site directory to check
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Override the built-in check lists with a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::deploy(
        &DeployOptions {
            dir: cli.dir,
            config: cli.config,
            strict: cli.strict,
        },
        output_mode,
    )
}
