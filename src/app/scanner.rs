use crate::app::detector::Detector;
use crate::app::error::ScanError;
use crate::app::matcher::PatternMatcher;
use crate::app::models::{ImageRef, ScanConfig};
use crate::app::results::ResultSet;
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::path::Path;

pub struct Scanner {
    config: ScanConfig,
    excludes: PatternMatcher,
}

impl Scanner {
    /// Takes ownership of the config. Fails if the root is not an existing directory.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let metadata = fs::metadata(&config.root).map_err(|e| ScanError::Config {
            path: config.root.clone(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::Config {
                path: config.root.clone(),
                reason: "not a directory".to_string(),
            });
        }

        Ok(Self {
            excludes: PatternMatcher::new(&config.exclude_patterns),
            config,
        })
    }

    /// Walks the root depth-first and collects unique images.
    ///
    /// Any traversal, pattern or detection failure aborts the whole scan;
    /// images gathered before the failure are discarded.
    pub fn scan(&self) -> Result<Vec<ImageRef>, ScanError> {
        let mut images = ResultSet::new();

        // Filters off: exclusion is decided by patterns alone. Following
        // links makes dangling ones surface as walk errors.
        let walker = WalkBuilder::new(&self.config.root)
            .standard_filters(false)
            .follow_links(true)
            .build();

        for result in walker {
            let entry = result.map_err(|err| ScanError::from_walk(&self.config.root, err))?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            self.process_file(entry.path(), &mut images)?;
        }

        log::debug!("Collected {} unique images", images.len());
        Ok(images.finalize())
    }

    fn process_file(&self, path: &Path, images: &mut ResultSet) -> Result<(), ScanError> {
        log::debug!("Visiting {}", path.display());

        if let Some(pattern) = self.excludes.first_match(path)? {
            log::debug!("Excluded {} by pattern {:?}", path.display(), pattern);
            return Ok(());
        }

        let Some(detector) = self.select_detector(path) else {
            log::debug!("No detector supports {}", path.display());
            return Ok(());
        };
        log::debug!("Using detector {:?} for {}", detector.name(), path.display());

        let found = {
            let mut file = open_candidate(path)?;
            detector
                .detect(&mut file)
                .map_err(|source| ScanError::Detection {
                    path: path.to_path_buf(),
                    detector: detector.name().to_string(),
                    source,
                })?
        };

        if !found.is_empty() {
            log::debug!("Found {} images in {}", found.len(), path.display());
        }
        images.extend(found);
        Ok(())
    }

    /// First detector in list order that accepts the path.
    fn select_detector(&self, path: &Path) -> Option<&dyn Detector> {
        self.config
            .detectors
            .iter()
            .map(|d| d.as_ref())
            .find(|d| d.is_supported(path))
    }
}

/// Failing to open a candidate is a filesystem access failure, not a detection one.
fn open_candidate(path: &Path) -> Result<File, ScanError> {
    File::open(path).map_err(|source| ScanError::Traversal {
        path: path.to_path_buf(),
        source,
    })
}
