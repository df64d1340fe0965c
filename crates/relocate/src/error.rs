// ABOUTME: Error types for slotfill including ErrorCode enum and RelocateError struct.
// ABOUTME: Only option validation and file I/O can fail; relocation itself never does.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error codes representing the categories of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOptions,
    Io,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidOptions => "invalid options",
            ErrorCode::Io => "I/O error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for slotfill operations.
#[derive(Debug, thiserror::Error)]
pub struct RelocateError {
    pub code: ErrorCode,
    pub op: String,
    pub path: Option<PathBuf>,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for RelocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slotfill: {}", self.op)?;
        if let Some(ref path) = self.path {
            write!(f, " {}", path.display())?;
        }
        write!(f, ": {}", self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl RelocateError {
    /// Create an InvalidOptions error.
    pub fn invalid_options(op: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::InvalidOptions,
            op: op.into(),
            path: None,
            source: Some(anyhow::anyhow!("{}", reason)),
        }
    }

    /// Create an Io error for the given path.
    pub fn io(op: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self {
            code: ErrorCode::Io,
            op: op.into(),
            path: Some(path.to_path_buf()),
            source: Some(source.into()),
        }
    }

    /// Returns true if this is an InvalidOptions error.
    pub fn is_invalid_options(&self) -> bool {
        self.code == ErrorCode::InvalidOptions
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RelocateError>;
