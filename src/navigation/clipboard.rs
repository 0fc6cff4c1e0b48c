//! Best-effort copy with a fallback path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Transient, non-blocking message shown after a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Copied => "Copied.",
            Notice::CopyFailed => "Copy failed.",
        }
    }
}

/// Try `primary`, then `fallback`. Failures end up in the notice only.
pub fn copy_text(primary: &mut impl Clipboard, fallback: &mut impl Clipboard, text: &str) -> Notice {
    match primary.write_text(text) {
        Ok(()) => Notice::Copied,
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard write failed, trying fallback");
            match fallback.write_text(text) {
                Ok(()) => Notice::Copied,
                Err(e) => {
                    tracing::warn!(error = %e, "Fallback copy failed");
                    Notice::CopyFailed
                }
            }
        }
    }
}
