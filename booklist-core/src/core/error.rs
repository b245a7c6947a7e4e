//! Error types for the Booklist core library.

use thiserror::Error;

/// All errors that can occur within the Booklist core library.
///
/// The list, entry and form components never fail; these errors only arise
/// while reading a catalog from outside the process.
#[derive(Debug, Error)]
pub enum BooklistError {
    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data could not be deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file is structurally valid JSON but not a usable catalog.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A book record broke a required-field rule.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Convenience alias that pins the error type to [`BooklistError`].
pub type Result<T> = std::result::Result<T, BooklistError>;

impl BooklistError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
            Self::InvalidCatalog(_) => "Could not open catalog file".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
        }
    }
}
