// Declare modules
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod matcher;
pub mod models;
pub mod results;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{ImageRef, RuntimeConfig, ScanConfig};
use self::scanner::Scanner;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;
    init_logging(config.verbose);

    log::info!("Starting image detector...");
    if let Some(path) = &config.config_file {
        log::debug!("Loaded config file {}", path.display());
    }

    // 3. Scan Directory
    let images = scan(&config)?;
    log::info!("Image detection completed, {} images found", images.len());

    // 4. Publish Output
    publish(&config, &images)
}

fn scan(config: &RuntimeConfig) -> Result<Vec<ImageRef>> {
    let scan_config = ScanConfig::from(config);
    log::debug!("Available detectors: {}", scan_config.detectors.len());
    log::debug!("Excluding patterns: {:?}", scan_config.exclude_patterns);
    log::info!("Scanning directory {}", scan_config.root.display());

    let scanner = Scanner::new(scan_config)?;
    scanner
        .scan()
        .context("Error finding images in files")
}

fn publish(config: &RuntimeConfig, images: &[ImageRef]) -> Result<()> {
    let rendered = OutputGenerator::render(images, config.format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if let Some(path) = &config.github_output {
        let json = OutputGenerator::to_json(images)?;
        OutputGenerator::write_github_output(path, "images", &json)
            .context("Error setting images output")?;
        log::debug!("Wrote images output to {}", path.display());
    }

    Ok(())
}
