use crate::app::models::{ImageRef, OutputFormat};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn to_json(images: &[ImageRef]) -> Result<String> {
        serde_json::to_string(images).context("Failed to marshal images")
    }

    pub fn render(images: &[ImageRef], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Self::to_json(images),
            OutputFormat::Lines => Ok(images
                .iter()
                .map(ImageRef::as_str)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Appends `name=value` to a GitHub Actions output file, creating it if needed.
    pub fn write_github_output(path: &Path, name: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open output file {:?}", path))?;
        writeln!(file, "{}={}", name, value)
            .with_context(|| format!("Failed to write output file {:?}", path))?;
        Ok(())
    }
}
