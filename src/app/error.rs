use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a detector while consuming file content.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to read content")]
    Read(#[from] io::Error),

    #[error("malformed content: {reason}")]
    Malformed { reason: String },
}

/// Fatal scan failures. Any of these aborts the scan with no partial result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid root directory {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("error accessing path {path:?}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error matching exclude pattern {pattern:?} against path {path:?}")]
    Pattern {
        pattern: String,
        path: PathBuf,
        #[source]
        source: globset::Error,
    },

    #[error("detector {detector:?} failed on file {path:?}")]
    Detection {
        path: PathBuf,
        detector: String,
        #[source]
        source: DetectError,
    },
}

impl ScanError {
    /// Builds a traversal error from a walker failure, recovering the
    /// offending path when the walker recorded one.
    pub fn from_walk(root: &std::path::Path, err: ignore::Error) -> Self {
        let path = walk_error_path(&err).unwrap_or_else(|| root.to_path_buf());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));
        ScanError::Traversal { path, source }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
