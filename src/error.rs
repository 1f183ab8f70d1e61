use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToukijoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} failed with status: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse registry page: {0}")]
    Parse(String),

    #[error("Failed to write {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse failure categories reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    File,
    Config,
}

impl ToukijoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToukijoError::Http(_) | ToukijoError::HttpStatus { .. } => ErrorKind::Network,
            ToukijoError::Parse(_) => ErrorKind::Parse,
            ToukijoError::File { .. } | ToukijoError::Csv { .. } => ErrorKind::File,
            ToukijoError::Config(_) | ToukijoError::Toml(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToukijoError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToukijoError>;
