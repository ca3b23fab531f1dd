//! Huffman decoder (decompression).

use crate::freq::{END_OF_BLOCK, FrequencyTable};
use crate::tree::{HuffmanNode, HuffmanTree};
use huffpress_core::BitReader;
use huffpress_core::error::{HuffpressError, Result};
use std::io::{Read, Write};

/// Huffman decoder for one frequency distribution.
///
/// Rebuilds the coding tree from the frequency table read out of the
/// stream header. Because tree construction is deterministic, the shape is
/// identical to the one the encoder derived codes from.
#[derive(Debug)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Build a decoder from a frequency table.
    pub fn new(table: &FrequencyTable) -> Self {
        Self {
            tree: HuffmanTree::from_frequencies(table),
        }
    }

    /// Decode the bit stream in `input` into `output`.
    ///
    /// A cursor walks from the root: bit 0 moves left, bit 1 moves right.
    /// Reaching a byte leaf emits that byte and resets the cursor; reaching
    /// the end-of-block leaf stops decoding without emitting, leaving any
    /// padding bits unread. If the input runs out before the end-of-block
    /// leaf is reached, everything decoded so far has already been written
    /// to `output` and a truncated-stream error reports how many bytes
    /// that was.
    ///
    /// Returns the number of bytes emitted.
    pub fn decode<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<u64> {
        let mut reader = BitReader::new(input);
        let mut cursor = self.tree.root();
        let mut bytes_emitted = 0u64;

        loop {
            match cursor {
                HuffmanNode::Leaf { symbol } => {
                    if *symbol == END_OF_BLOCK {
                        break;
                    }
                    output.write_all(&[*symbol as u8])?;
                    bytes_emitted += 1;
                    cursor = self.tree.root();
                }
                HuffmanNode::Internal { left, right } => match reader.read_bit()? {
                    Some(false) => cursor = left,
                    Some(true) => cursor = right,
                    None => return Err(HuffpressError::truncated(bytes_emitted)),
                },
            }
        }

        Ok(bytes_emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::HuffmanEncoder;
    use std::io::Cursor;

    fn roundtrip_body(data: &[u8]) -> (FrequencyTable, Vec<u8>) {
        let table = FrequencyTable::scan(Cursor::new(data)).unwrap();
        let mut body = Vec::new();
        HuffmanEncoder::new(&table)
            .encode(Cursor::new(data), &mut body)
            .unwrap();
        (table, body)
    }

    #[test]
    fn test_decode_aab() {
        let (table, body) = roundtrip_body(b"aab");
        let mut decoded = Vec::new();
        let n = HuffmanDecoder::new(&table)
            .decode(Cursor::new(&body), &mut decoded)
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(decoded, b"aab");
    }

    #[test]
    fn test_decode_stops_at_terminator_before_padding() {
        // "aab" encodes to 6 payload bits; the final two padding zeros
        // must never be walked.
        let (table, body) = roundtrip_body(b"aab");
        assert_eq!(body, vec![0x2C]);
        let mut decoded = Vec::new();
        HuffmanDecoder::new(&table)
            .decode(Cursor::new(&body), &mut decoded)
            .unwrap();
        assert_eq!(decoded, b"aab");
    }

    #[test]
    fn test_decode_empty_body() {
        let (table, body) = roundtrip_body(b"");
        assert!(body.is_empty());
        let mut decoded = Vec::new();
        let n = HuffmanDecoder::new(&table)
            .decode(Cursor::new(&body), &mut decoded)
            .unwrap();
        assert_eq!(n, 0);
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_truncated_body_keeps_partial_output() {
        let data = b"truncation truncation truncation";
        let (table, body) = roundtrip_body(data);

        let mut decoded = Vec::new();
        let err = HuffmanDecoder::new(&table)
            .decode(Cursor::new(&body[..body.len() / 2]), &mut decoded)
            .unwrap_err();

        let HuffpressError::TruncatedStream { bytes_emitted } = err else {
            panic!("expected a truncated-stream error, got {err:?}");
        };
        assert_eq!(bytes_emitted, decoded.len() as u64);
        // The emitted prefix must match the original, nothing fabricated.
        assert_eq!(&data[..decoded.len()], &decoded[..]);
        assert!(decoded.len() < data.len());
    }
}
