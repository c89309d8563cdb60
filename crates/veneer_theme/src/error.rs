//! Theme error types

use thiserror::Error;

/// Theme-layer errors
///
/// Reading settings never produces one of these: a missing or unreadable
/// document falls back to defaults by contract. Only writing settings and
/// running structural fixups can fail.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Settings document could not be written
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings document could not be serialized
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A per-widget structural fixup failed; the walker logs this and
    /// continues with the next node
    #[error("fixup on {widget}: {message}")]
    Fixup { widget: String, message: String },
}

impl ThemeError {
    /// Shorthand used inside fixup closures
    pub fn fixup(widget: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fixup {
            widget: widget.into(),
            message: message.into(),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
