//! Huffman encoder (compression).

use crate::code::CodeTable;
use crate::freq::{END_OF_BLOCK, FrequencyTable};
use crate::tree::HuffmanTree;
use huffpress_core::BitWriter;
use huffpress_core::error::Result;
use std::io::{ErrorKind, Read, Write};

/// Huffman encoder for one frequency distribution.
///
/// Construction derives the code table from the given frequencies; the
/// same table must be persisted as the stream header so the decoder can
/// rebuild the identical tree.
#[derive(Debug)]
pub struct HuffmanEncoder {
    codes: CodeTable,
}

impl HuffmanEncoder {
    /// Build an encoder from a frequency table.
    pub fn new(table: &FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(table);
        Self {
            codes: CodeTable::from_tree(&tree),
        }
    }

    /// Encode `input` into `output` as a bit stream.
    ///
    /// Every input byte is emitted as its code, the end-of-block code is
    /// appended after input exhaustion, and the final partial byte is
    /// zero-padded. `input` must be positioned at the start of the same
    /// data the frequency table was scanned from.
    ///
    /// Returns the number of payload bits written, excluding padding.
    ///
    /// # Panics
    ///
    /// Panics if a byte is read that has no code. That cannot happen when
    /// the frequency table was scanned from the same input; it indicates a
    /// caller bug, not a data problem.
    pub fn encode<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<u64> {
        let mut writer = BitWriter::new(output);

        let mut buf = [0u8; 8192];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                let code = self.codes.code(byte as u16).expect(
                    "BUG: byte missing from code table despite appearing in the frequency scan",
                );
                for &bit in code {
                    writer.write_bit(bit)?;
                }
            }
        }

        let terminator = self
            .codes
            .code(END_OF_BLOCK)
            .expect("BUG: end-of-block symbol missing from code table");
        for &bit in terminator {
            writer.write_bit(bit)?;
        }

        let bits = writer.bits_written();
        writer.flush()?;
        Ok(bits)
    }

    /// The derived code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }
}
