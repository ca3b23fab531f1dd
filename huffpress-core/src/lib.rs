//! # Huffpress Core
//!
//! Core components for the Huffpress compression library:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length prefix codes
//! - [`error`]: Error types shared by the codec and CLI crates
//!
//! The codec itself (frequency analysis, tree construction, encode/decode)
//! lives in the `huffpress-huffman` crate; this crate holds the pieces that
//! are independent of the Huffman algorithm.
//!
//! ## Example
//!
//! ```rust
//! use huffpress_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut encoded = Vec::new();
//! let mut writer = BitWriter::new(&mut encoded);
//! writer.write_bits(0b110, 3).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(&encoded));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b110);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HuffpressError, Result};
