//! Error types for Huffpress operations.
//!
//! One error type covers both crates: I/O faults from the underlying
//! streams, header validation failures, and corrupt or truncated encoded
//! streams. Invariant violations (a byte with no code after a correct
//! frequency scan) are bugs, not runtime conditions, and panic instead.

use std::io;
use thiserror::Error;

/// The main error type for Huffpress operations.
#[derive(Debug, Error)]
pub enum HuffpressError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header could not be parsed into a valid frequency table.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Bit source ran out before the end-of-block symbol was decoded.
    #[error("Truncated stream: input exhausted after {bytes_emitted} decoded bytes")]
    TruncatedStream {
        /// Bytes already written to the output sink before the fault.
        bytes_emitted: u64,
    },

    /// Unexpected end of stream while reading bits.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ended.
        position: u64,
    },
}

/// Result type alias for Huffpress operations.
pub type Result<T> = std::result::Result<T, HuffpressError>;

impl HuffpressError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(bytes_emitted: u64) -> Self {
        Self::TruncatedStream { bytes_emitted }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }
}
