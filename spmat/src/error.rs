//! Error type for file-backed matrix operations

use std::io;
use std::path::{Path, PathBuf};

use spmat_core::{ErrorKind, MatrixError};
use thiserror::Error;

/// Errors surfaced by loading, computing and saving matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Matrix-level failure (bounds, shapes, parsing, overflow)
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl Error {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::Io { .. } => ErrorKind::IoError,
            Error::Matrix(err) => err.kind(),
        }
    }

    /// Map a read failure, separating missing files from other I/O errors
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::io(path, source)
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for file-backed matrix operations
pub type Result<T> = std::result::Result<T, Error>;
