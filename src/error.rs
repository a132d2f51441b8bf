use std::{num::ParseIntError, path::PathBuf};
use thiserror::Error;

pub type SvdistResult<T> = std::result::Result<T, SvdistError>;

#[derive(Debug, Error)]
pub enum SvdistError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
    #[error(
        "Expected at least {expected} fields, found {found} at {}:{line}",
        path.display()
    )]
    MissingColumn {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("INFO field {key} missing at {}:{line}", path.display())]
    MissingInfoField {
        path: PathBuf,
        line: usize,
        key: &'static str,
    },
    #[error("Invalid integer '{value}' at {}:{line}: {source}", path.display())]
    InvalidInteger {
        path: PathBuf,
        line: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("Call found before any '##Sample:' header at {}:{line}", path.display())]
    MissingSampleHeader { path: PathBuf, line: usize },
}

impl SvdistError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[macro_export]
macro_rules! svdist_error {
    ($($arg:tt)*) => {
        $crate::error::SvdistError::message(format!($($arg)*))
    };
}
