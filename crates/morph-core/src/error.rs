//! Error types for the cloud engine.

/// Errors surfaced by the control operations.
///
/// Both variants are caller mistakes; nothing here is recoverable I/O.
/// The operation that failed leaves engine state untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// Shape identifier outside the supported set.
    #[error("unknown shape: {0:?}")]
    UnknownShape(String),

    /// Color string that does not parse as `#rrggbb`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;
