use crate::app::error::DetectError;
use crate::app::models::ImageRef;
use regex::bytes::Regex;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// A strategy for finding image references in file content.
///
/// The scanner asks each detector in turn whether it supports a path and runs
/// only the first one that does.
pub trait Detector {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Decides from the path alone; must not touch the filesystem.
    fn is_supported(&self, path: &Path) -> bool;

    /// Returns every match in order of appearance. Duplicates are kept.
    fn detect(&self, content: &mut dyn Read) -> Result<Vec<ImageRef>, DetectError>;
}

// [registry/namespace/...]repository[:port]/image[/image...]:tag[@digest] | @digest
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:[a-z0-9]+(?:[.-][a-z0-9]+)*/)*",
        r"[a-z0-9]+(?:[.-][a-z0-9]+)*(?::[0-9]+)?",
        r"(?:/[a-z0-9]+(?:[._-][a-z0-9]+)*)+",
        r"(?::[A-Za-z0-9_]+(?:[.-]+[A-Za-z0-9_]+)*(?:@sha256:[a-f0-9]{64})?|@sha256:[a-f0-9]{64})",
    ))
    .unwrap()
});

/// Catch-all detector that accepts every file and pattern-matches its text.
/// Keep it last in the detector list.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDetector;

impl Detector for GenericDetector {
    fn name(&self) -> &str {
        "generic"
    }

    fn is_supported(&self, _path: &Path) -> bool {
        true
    }

    fn detect(&self, content: &mut dyn Read) -> Result<Vec<ImageRef>, DetectError> {
        let mut data = Vec::new();
        content.read_to_end(&mut data)?;

        Ok(IMAGE_PATTERN
            .find_iter(&data)
            .map(|m| ImageRef::new(String::from_utf8_lossy(m.as_bytes())))
            .collect())
    }
}
