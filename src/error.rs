//! Error taxonomy for the decode stage.

use thiserror::Error;

/// Why a PNG could not be turned into a [`DecodedImage`](crate::DecodedImage).
///
/// Every kind is recoverable at the per-image boundary: a batch caller
/// reports the failure and moves on to its next input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Source file unreadable (missing, permissions, truncated read).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Not a PNG, or the stream is corrupt.
    #[error("invalid PNG stream: {0}")]
    Format(#[source] png::DecodingError),

    /// The image decodes fine but is not 8-bit RGBA, the only layout the
    /// packed-word format is defined for.
    #[error("unsupported color layout: {color_type:?} at {bit_depth:?} bit depth (need 8-bit RGBA)")]
    Unsupported {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    /// Decoded buffer size does not fit in addressable memory.
    #[error("image too large: decoded buffer size overflows")]
    TooLarge,
}

impl From<png::DecodingError> for DecodeError {
    fn from(e: png::DecodingError) -> Self {
        // Keep I/O failures in their own kind so callers can tell an
        // unreadable file apart from a corrupt one.
        match e {
            png::DecodingError::IoError(io) => DecodeError::Io(io),
            other => DecodeError::Format(other),
        }
    }
}
