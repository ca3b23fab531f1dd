//! # Huffpress-Huffman: Pure Rust Huffman stream compression
//!
//! Lossless compression of arbitrary byte streams with a static Huffman
//! code: a full scan counts symbol frequencies, an optimal prefix tree is
//! built by greedy min-merging, and a second pass emits each byte's code
//! bit by bit. A reserved end-of-block symbol (value 256) terminates the
//! encoded payload so padding bits are never misread as data.
//!
//! ## Wire format
//!
//! 1. Header: the frequency table as a `u32` little-endian entry count
//!    (always 257) followed by 257 `u64` little-endian counts.
//! 2. Body: MSB-first concatenation of per-byte codes in input order, then
//!    the end-of-block code, then zero bits up to the next byte boundary.
//!
//! The decoder rebuilds the identical tree from the header; tree shape is
//! a deterministic function of the table within this implementation, but
//! is not promised to match trees built by other Huffman implementations.
//!
//! ## Example
//!
//! ```rust
//! use huffpress_huffman::{compress, decompress};
//!
//! let original = b"so much depends upon a red wheel barrow";
//!
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod code;
mod decoder;
mod encoder;
mod freq;
mod tree;

pub use code::CodeTable;
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use freq::{END_OF_BLOCK, FrequencyTable, SYMBOL_COUNT};
pub use huffpress_core::error::{HuffpressError, Result};
pub use tree::{HuffmanNode, HuffmanTree};

use std::io::{Cursor, Read, Seek, SeekFrom, Write};

/// Compress `input` into `output`, writing the header followed by the
/// encoded body.
///
/// Frequency analysis and encoding are two independent full passes, which
/// is why `input` must be seekable: the stream is scanned from its current
/// position to the end, rewound, and read again. Callers with two separate
/// handles to the same data can instead drive [`FrequencyTable::scan`] and
/// [`HuffmanEncoder::encode`] directly.
///
/// Returns the number of encoded payload bits, excluding the header and
/// the final zero padding.
pub fn compress_stream<R: Read + Seek, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let start = input.stream_position()?;
    let table = FrequencyTable::scan(&mut *input)?;
    input.seek(SeekFrom::Start(start))?;

    table.write_to(output)?;
    let encoder = HuffmanEncoder::new(&table);
    encoder.encode(input, output)
}

/// Decompress a stream produced by [`compress_stream`] into `output`.
///
/// Reads and validates the header, rebuilds the coding tree, and decodes
/// the body until the end-of-block symbol. Bytes decoded before a
/// truncation fault remain in `output`; the error reports their count.
///
/// Returns the number of bytes emitted.
pub fn decompress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let table = FrequencyTable::read_from(input)?;
    let decoder = HuffmanDecoder::new(&table);
    decoder.decode(input, output)
}

/// Compress a byte slice (convenience wrapper around [`compress_stream`]).
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    compress_stream(&mut Cursor::new(data), &mut output)?;
    Ok(output)
}

/// Decompress a byte slice (convenience wrapper around
/// [`decompress_stream`]).
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress_stream(&mut Cursor::new(data), &mut output)?;
    Ok(output)
}
