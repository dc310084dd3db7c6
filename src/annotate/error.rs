//! Per-file annotation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort annotation of a single file.
///
/// None of these stop a run; the runner records them and moves on.
#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
    #[error("cannot parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl AnnotateError {
    pub fn path(&self) -> &PathBuf {
        match self {
            AnnotateError::Io { path, .. } => path,
            AnnotateError::Encoding { path } => path,
            AnnotateError::Parse { path, .. } => path,
        }
    }

    /// Parse failures mean "skip this file", not "something broke".
    pub fn is_parse_error(&self) -> bool {
        matches!(self, AnnotateError::Parse { .. })
    }
}
