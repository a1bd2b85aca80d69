//! Error types for the synthesis core.
//!
//! The numeric pipeline itself never errors; generators degrade to
//! `None` and callers propagate that as "no sound". These types cover
//! the outward-facing boundary where "no sound" and I/O failures must
//! surface to a caller.

use thiserror::Error;

/// Result type for outward-facing synthesis operations.
pub type SfxResult<T> = Result<T, SfxError>;

/// Errors surfaced at the synthesis boundary.
#[derive(Debug, Error)]
pub enum SfxError {
    /// A recipe produced no audio for the requested emoji.
    #[error("no sound produced for emoji '{emoji}'")]
    NoSound {
        /// The emoji glyph that was requested.
        emoji: String,
    },

    /// I/O error while writing encoded audio.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SfxError {
    /// Creates a no-sound error for an emoji.
    pub fn no_sound(emoji: impl Into<String>) -> Self {
        Self::NoSound {
            emoji: emoji.into(),
        }
    }
}
