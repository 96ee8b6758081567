use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZiglintError {
    #[error("Path does not exist or is inaccessible: {path}")]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ZiglintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
