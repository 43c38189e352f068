//! Error types for template lookup and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or reading a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No file with the expected template name exists under the root.
    #[error("template '{name}' not found under {}", root.display())]
    NotFound {
        /// The file name that was searched for.
        name: String,
        /// The root directory that was searched.
        root: PathBuf,
    },

    /// I/O error during traversal or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
