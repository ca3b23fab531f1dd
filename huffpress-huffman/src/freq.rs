//! Symbol frequency table and its header persistence.
//!
//! The table covers the 256 raw byte values plus one reserved end-of-block
//! symbol (index 256). The end-of-block count is always at least 1, even
//! for empty input, so the coding tree always contains a terminator leaf.

use huffpress_core::error::{HuffpressError, Result};
use std::io::{ErrorKind, Read, Write};

/// Number of symbols: 256 byte values plus the end-of-block marker.
pub const SYMBOL_COUNT: usize = 257;

/// The reserved end-of-block symbol, distinct from any raw byte value.
pub const END_OF_BLOCK: u16 = 256;

/// Occurrence counts for every symbol, indexed by symbol value.
///
/// Built once per compression by a full scan of the input, persisted
/// verbatim as the file header, and reconstructed from the header during
/// decompression. It is never re-derived from decoded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Serialized header size in bytes: a `u32` entry count followed by
    /// one `u64` per symbol, all little-endian.
    pub const ENCODED_LEN: usize = 4 + SYMBOL_COUNT * 8;

    /// Build a frequency table by reading `input` to exhaustion.
    ///
    /// The end-of-block count is set to 1 up front and never incremented.
    /// Read faults from the source are propagated immediately.
    pub fn scan<R: Read>(mut input: R) -> Result<Self> {
        let mut counts = vec![0u64; SYMBOL_COUNT];
        counts[END_OF_BLOCK as usize] = 1;

        let mut buf = [0u8; 8192];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                counts[byte as usize] += 1;
            }
        }

        Ok(Self { counts })
    }

    /// Occurrence count for a symbol.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside `0..=256`.
    pub fn count(&self, symbol: u16) -> u64 {
        self.counts[symbol as usize]
    }

    /// Iterate over `(symbol, count)` pairs with a nonzero count, in
    /// ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u16, count))
    }

    /// Total number of raw bytes the scanned input contained.
    pub fn input_len(&self) -> u64 {
        self.counts[..END_OF_BLOCK as usize].iter().sum()
    }

    /// Number of distinct byte values present in the scanned input.
    pub fn distinct_bytes(&self) -> usize {
        self.counts[..END_OF_BLOCK as usize]
            .iter()
            .filter(|&&count| count > 0)
            .count()
    }

    /// Persist the table as the compressed-stream header.
    ///
    /// Layout: `u32` little-endian entry count (always 257) followed by
    /// 257 `u64` little-endian counts in symbol order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&(SYMBOL_COUNT as u32).to_le_bytes())?;
        for &count in &self.counts {
            writer.write_all(&count.to_le_bytes())?;
        }
        Ok(())
    }

    /// Read a table back from a compressed-stream header.
    ///
    /// Fails with an invalid-header error when the entry count is not 257,
    /// when the header bytes run out early, or when the end-of-block count
    /// is zero (no encoder output can lack the terminator).
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut word = [0u8; 4];
        read_header_exact(reader, &mut word)?;
        let entries = u32::from_le_bytes(word) as usize;
        if entries != SYMBOL_COUNT {
            return Err(HuffpressError::invalid_header(format!(
                "expected {} frequency entries, found {}",
                SYMBOL_COUNT, entries
            )));
        }

        let mut counts = vec![0u64; SYMBOL_COUNT];
        let mut field = [0u8; 8];
        for count in counts.iter_mut() {
            read_header_exact(reader, &mut field)?;
            *count = u64::from_le_bytes(field);
        }

        if counts[END_OF_BLOCK as usize] == 0 {
            return Err(HuffpressError::invalid_header(
                "end-of-block symbol has zero frequency",
            ));
        }

        Ok(Self { counts })
    }
}

/// `read_exact` that reports a short read as a header fault rather than a
/// bare I/O error.
fn read_header_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            HuffpressError::invalid_header("header truncated")
        } else {
            e.into()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_scan_counts_bytes() {
        let table = FrequencyTable::scan(Cursor::new(b"aab")).unwrap();
        assert_eq!(table.count(b'a' as u16), 2);
        assert_eq!(table.count(b'b' as u16), 1);
        assert_eq!(table.count(b'c' as u16), 0);
        assert_eq!(table.count(END_OF_BLOCK), 1);
        assert_eq!(table.input_len(), 3);
        assert_eq!(table.distinct_bytes(), 2);
    }

    #[test]
    fn test_scan_empty_input_keeps_terminator() {
        let table = FrequencyTable::scan(Cursor::new(b"")).unwrap();
        assert_eq!(table.count(END_OF_BLOCK), 1);
        assert_eq!(table.symbols().count(), 1);
        assert_eq!(table.input_len(), 0);
    }

    #[test]
    fn test_header_roundtrip() {
        let table = FrequencyTable::scan(Cursor::new(b"hello, huffman")).unwrap();

        let mut header = Vec::new();
        table.write_to(&mut header).unwrap();
        assert_eq!(header.len(), FrequencyTable::ENCODED_LEN);

        let reread = FrequencyTable::read_from(&mut Cursor::new(&header)).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn test_bad_entry_count_is_rejected() {
        let mut header = Vec::new();
        header.extend_from_slice(&12u32.to_le_bytes());
        header.extend_from_slice(&[0u8; 96]);

        let err = FrequencyTable::read_from(&mut Cursor::new(&header)).unwrap_err();
        assert!(matches!(err, HuffpressError::InvalidHeader { .. }));
    }

    #[test]
    fn test_short_header_is_rejected() {
        let mut header = Vec::new();
        let table = FrequencyTable::scan(Cursor::new(b"abc")).unwrap();
        table.write_to(&mut header).unwrap();
        header.truncate(100);

        let err = FrequencyTable::read_from(&mut Cursor::new(&header)).unwrap_err();
        assert!(matches!(err, HuffpressError::InvalidHeader { .. }));
    }

    #[test]
    fn test_zero_terminator_count_is_rejected() {
        let mut header = Vec::new();
        header.extend_from_slice(&(SYMBOL_COUNT as u32).to_le_bytes());
        for _ in 0..SYMBOL_COUNT {
            header.extend_from_slice(&0u64.to_le_bytes());
        }

        let err = FrequencyTable::read_from(&mut Cursor::new(&header)).unwrap_err();
        assert!(matches!(err, HuffpressError::InvalidHeader { .. }));
    }
}
