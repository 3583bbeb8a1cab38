//! Global error handling for dirdump
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for dirdump operations
#[derive(Error, Debug)]
pub enum DirDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scanner errors
    #[error("Scanner error: {0}")]
    Scanner(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Specialized Result type for dirdump operations
pub type Result<T> = std::result::Result<T, DirDumpError>;

/// Creates a DirDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
