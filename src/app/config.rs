use crate::app::cli::Cli;
use crate::app::models::{OutputFormat, RuntimeConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Exclusions applied when neither the CLI nor the config file provides any.
pub const DEFAULT_EXCLUDES: &[&str] = &["**/.git/**", "**/node_modules/**", "**/vendor/**"];

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FileConfig {
    check_directory: Option<PathBuf>,
    exclude: Option<Vec<String>>,
    verbose: Option<bool>,
    format: Option<OutputFormat>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("image-detector").join("config.toml"))
}

fn parse_config_file(path: &Path) -> Result<FileConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config at {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config at {:?}", path))
}

/// Picks the file to load. An explicit path must load; the default location
/// is used only when present.
fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.exists()),
    }
}

fn load_config_file(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => parse_config_file(path),
        None => Ok(FileConfig::default()),
    }
}

/// Concatenates file then CLI values, dropping repeats but keeping order.
fn merge_vecs(file_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = file_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn merge(
    cli: Cli,
    file: FileConfig,
    github_output: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> RuntimeConfig {
    let mut exclude = merge_vecs(file.exclude, cli.exclude);
    if exclude.is_empty() {
        exclude = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    }

    RuntimeConfig {
        check_directory: cli
            .check_directory
            .or(file.check_directory)
            .unwrap_or_else(|| PathBuf::from(".")),
        exclude,
        verbose: cli.verbose || file.verbose.unwrap_or(false),
        format: cli.format.or(file.format).unwrap_or_default(),
        github_output,
        config_file,
    }
}

/// Resolves CLI args, the config file and the environment into one config.
pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let config_file = locate_config_file(cli.config.as_deref());
    let file = load_config_file(config_file.as_deref())?;
    let github_output = std::env::var_os("GITHUB_OUTPUT")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    Ok(merge(cli, file, github_output, config_file))
}
