use crate::app::error::ScanError;
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

/// Ordered exclusion patterns.
///
/// Patterns are compiled up front, but a malformed one is only reported when
/// a path actually reaches it, so a file already excluded by an earlier
/// pattern never trips over a broken later one.
pub struct PatternMatcher {
    patterns: Vec<(String, Result<GlobMatcher, globset::Error>)>,
}

impl PatternMatcher {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|pat| (pat.clone(), compile(pat)))
                .collect(),
        }
    }

    /// Returns the first pattern that matches `path`, if any.
    pub fn first_match(&self, path: &Path) -> Result<Option<&str>, ScanError> {
        for (pattern, compiled) in &self.patterns {
            let matcher = compiled.as_ref().map_err(|e| ScanError::Pattern {
                pattern: pattern.clone(),
                path: path.to_path_buf(),
                source: e.clone(),
            })?;
            if matcher.is_match(path) {
                return Ok(Some(pattern.as_str()));
            }
        }
        Ok(None)
    }
}

// `*` stays within one path segment; only `**` crosses separators.
fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}
