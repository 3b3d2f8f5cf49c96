use crate::app::models::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Detect container image references in files",
    long_about = "Scans a directory tree for container image references such as \
docker.io/library/ubuntu:latest in any text file (configuration, documentation, \
infrastructure-as-code) and prints the unique set that was found."
)]
pub struct Cli {
    /// Directory to check for files
    #[arg(short = 'd', long)]
    pub check_directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Patterns for files to exclude from detection (e.g., '**/vendor/**')
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// How to print the detected images
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
