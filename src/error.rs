use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlistError {
    #[error("{0}")]
    Usage(String),

    #[error("Cannot access path: {path}")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlistError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
