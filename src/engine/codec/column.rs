use std::io::{Read, Write};

use crate::engine::types::{LogicalType, Row, ScalarValue};

use super::bitmap::NullBitmap;
use super::error::CodecError;
use super::limits::CodecLimits;

/// Serializes one column of a batch as a single contiguous region.
///
/// Codecs are stateless; everything a read needs beyond the stream comes in
/// through [`ColumnScratch`].
pub trait ColumnCodec {
    fn write_column<W: Write + ?Sized>(
        &self,
        out: &mut W,
        col: usize,
        rows: &[Row],
    ) -> Result<(), CodecError>;

    /// Decodes into `rows[..][col]`. Rows must be pre-filled with nulls;
    /// null entries are left untouched.
    fn read_column<R: Read + ?Sized>(
        &self,
        input: &mut R,
        col: usize,
        rows: &mut [Row],
        scratch: &mut ColumnScratch,
    ) -> Result<(), CodecError>;
}

/// Per-call read state: the null bitmap buffer shared by every column of
/// one batch, and the decode limits.
pub struct ColumnScratch {
    null_bitmap: Vec<u8>,
    limits: CodecLimits,
}

impl ColumnScratch {
    pub fn new(row_count: usize, limits: CodecLimits) -> Self {
        Self {
            null_bitmap: vec![0u8; NullBitmap::size_for(row_count)],
            limits,
        }
    }

    pub fn null_bitmap(&self) -> &[u8] {
        &self.null_bitmap
    }

    pub fn null_bitmap_mut(&mut self) -> &mut [u8] {
        &mut self.null_bitmap
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }
}

pub(super) fn unexpected(expected: LogicalType, found: &ScalarValue) -> CodecError {
    CodecError::UnexpectedValue {
        expected,
        found: found.type_name(),
    }
}
