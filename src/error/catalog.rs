use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported catalog format '{extension}' (expected yaml, yml or json)")]
    UnsupportedFormat { extension: String },

    #[error("invalid catalog '{path}': settings.working_language must not be 0")]
    ZeroWorkingLanguage { path: PathBuf },

    #[error("invalid catalog '{path}': {message}")]
    InvalidCatalog { path: PathBuf, message: String },
}

impl CatalogError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    pub fn zero_working_language(path: impl Into<PathBuf>) -> Self {
        Self::ZeroWorkingLanguage { path: path.into() }
    }

    pub fn invalid_catalog(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            path: path.into(),
            message: message.into(),
        }
    }
}
