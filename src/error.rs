use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input image not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Could not decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Output directory does not exist: {}", path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("Permission denied writing {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Invalid output file name {}: {message}", path.display())]
    InvalidName { path: PathBuf, message: String },

    #[error("Could not save {}: {message}", path.display())]
    Save { path: PathBuf, message: String },

    #[error("No file name entered: standard input was closed")]
    NoInput,

    #[error("Feature not enabled: {0}. Recompile with --features {0}")]
    FeatureDisabled(String),
}

impl Error {
    /// Classifies an IO failure while creating or writing an output file.
    pub(crate) fn from_write(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::OutputDirMissing {
                path: path.parent().map(PathBuf::from).unwrap_or_default(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::InvalidInput => Self::InvalidName {
                path,
                message: err.to_string(),
            },
            _ => Self::Save {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Classifies a failure reported by an encoder while writing `path`.
    pub(crate) fn from_encode(path: PathBuf, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::from_write(path, io),
            other => Self::Save {
                path,
                message: other.to_string(),
            },
        }
    }
}
