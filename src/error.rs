use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(
        "Expected a valid session cookie in {}, use \"aoc cookie <value>\" to set one",
        .path.display()
    )]
    MissingCredential { path: PathBuf },

    #[error("Session cookie value is empty, nothing was stored in {}", .path.display())]
    EmptyCredential { path: PathBuf },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("File access failed for {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read template {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| AppError::Filesystem { path, source }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("Expected a Day between 1 and 25, got: {day}")]
    InvalidDay { day: u32 },

    #[error("Expected a Year between 2015 and {latest}, got: {year}")]
    InvalidYear { year: i32, latest: i32 },

    #[error("Expected Part Number to be 1 or 2, got: {part}")]
    InvalidPart { part: u8 },
}
