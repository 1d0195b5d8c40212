//! portfolio-resume - Generates the portfolio owner's resume as a PDF
//!
//! Writes `resume.pdf` (US letter, 0.75 inch margins) to the working
//! directory. When no PDF backend is compiled in, it prints how to get one
//! and exits without touching any file.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use portfolio_kit::resume::builder::INCLUDED_SECTIONS;
use portfolio_kit::resume::render::available_renderer;
use portfolio_kit::resume::{BuildRequest, BuildState, build};

/// portfolio-resume - Generate resume.pdf
#[derive(Parser, Debug)]
#[command(name = "portfolio-resume", version, about = "Generate the portfolio resume as a PDF")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory to write resume.pdf into
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,
}

/// Main entry point for the portfolio-resume CLI
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    println!("Starting resume generation...");
    println!("Creating professional PDF resume...");

    let renderer = available_renderer();
    if let Some(renderer) = &renderer {
        println!("Using the {} backend", renderer.name());
    }

    let request = BuildRequest {
        out_dir: cli.dir,
        generated_on: Local::now().date_naive(),
    };

    match build(renderer.as_deref(), &request) {
        BuildState::Built { path, bytes, pages } => {
            println!("Resume successfully generated: {}", path.display());
            println!("File size: {bytes} bytes ({pages} page(s))");
            println!("\nResume generation completed successfully!");
            println!("The resume includes:");
            for section in INCLUDED_SECTIONS {
                println!("   - {section}");
            }
            Ok(())
        },
        BuildState::Failed { path, error } => {
            println!("Error generating resume: {error}");
            anyhow::bail!("resume generation failed; {} may be incomplete", path.display())
        },
        BuildState::NotBuilt => {
            println!("PDF backend not available. Rebuild with the pdf feature enabled:");
            println!("   cargo install portfolio-kit --features pdf");
            Ok(())
        },
    }
}
