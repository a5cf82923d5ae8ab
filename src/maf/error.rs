use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading or summarizing MAF rows.
#[derive(Debug, Error)]
pub enum MafError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("Required column '{0}' is missing")]
    Schema(String),
}

impl MafError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MafError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MafError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
