use std::io::{Read, Write};

use crate::engine::types::Row;

use super::error::CodecError;

/// One presence bit per row, most significant bit first, eight rows per byte.
/// A set bit marks a null.
pub struct NullBitmap;

impl NullBitmap {
    pub fn size_for(row_count: usize) -> usize {
        row_count.div_ceil(8)
    }

    pub fn set_null(bitmap: &mut [u8], row: usize) {
        bitmap[row / 8] |= 0x80 >> (row % 8);
    }

    pub fn is_null(bitmap: &[u8], row: usize) -> bool {
        (bitmap[row / 8] & (0x80 >> (row % 8))) != 0
    }

    /// Emits exactly `size_for(rows.len())` bytes for column `col`.
    pub fn write_column<W: Write + ?Sized>(
        out: &mut W,
        col: usize,
        rows: &[Row],
    ) -> Result<(), CodecError> {
        for group in rows.chunks(8) {
            let mut byte = 0u8;
            for (offset, row) in group.iter().enumerate() {
                if row[col].is_null() {
                    byte |= 0x80 >> offset;
                }
            }
            out.write_all(&[byte])?;
        }
        Ok(())
    }

    /// Fills `bitmap` completely; its length must be `size_for(row_count)`.
    pub fn read_into<R: Read + ?Sized>(input: &mut R, bitmap: &mut [u8]) -> Result<(), CodecError> {
        input.read_exact(bitmap)?;
        Ok(())
    }
}
