use crate::app::detector::{Detector, GenericDetector};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub check_directory: PathBuf,
    pub exclude: Vec<String>,
    pub verbose: bool,
    pub format: OutputFormat,
    pub github_output: Option<PathBuf>,
    /// The config file that was loaded, if any.
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON array
    #[default]
    Json,
    /// One image per line
    Lines,
}

/// A textual container image coordinate, e.g. `docker.io/library/ubuntu:latest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one scan needs. Built once at the boundary and handed to the scanner.
pub struct ScanConfig {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
    /// Consulted in order; the first one supporting a file handles it.
    pub detectors: Vec<Box<dyn Detector>>,
}

impl ScanConfig {
    /// Config with the generic fallback as the only detector.
    pub fn new(root: impl Into<PathBuf>, exclude_patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            exclude_patterns,
            detectors: vec![Box::new(GenericDetector)],
        }
    }

    pub fn with_detectors(mut self, detectors: Vec<Box<dyn Detector>>) -> Self {
        self.detectors = detectors;
        self
    }
}

impl From<&RuntimeConfig> for ScanConfig {
    fn from(config: &RuntimeConfig) -> Self {
        ScanConfig::new(config.check_directory.clone(), config.exclude.clone())
    }
}
