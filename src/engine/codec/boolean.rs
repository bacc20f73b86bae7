use std::io::{Read, Write};

use crate::engine::types::{LogicalType, Row, ScalarValue};

use super::column::{ColumnCodec, ColumnScratch, unexpected};
use super::error::CodecError;
use super::wire;

/// Booleans share one bitstream with their null flags: a null row takes one
/// bit (set), a non-null row takes two (clear null bit, then the value).
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanCodec;

struct BitWriter {
    current: u8,
    mask: u8,
}

impl BitWriter {
    fn new() -> Self {
        Self {
            current: 0,
            mask: 0x80,
        }
    }

    fn push<W: Write + ?Sized>(&mut self, out: &mut W, bit: bool) -> Result<(), CodecError> {
        if bit {
            self.current |= self.mask;
        }
        self.mask >>= 1;
        // Byte full, flush and start over at the high bit
        if self.mask == 0 {
            wire::write_u8(out, self.current)?;
            self.current = 0;
            self.mask = 0x80;
        }
        Ok(())
    }

    fn finish<W: Write + ?Sized>(self, out: &mut W) -> Result<(), CodecError> {
        // Partial last byte, low bits stay zero
        if self.mask != 0x80 {
            wire::write_u8(out, self.current)?;
        }
        Ok(())
    }
}

struct BitReader {
    current: u8,
    mask: u8,
}

impl BitReader {
    fn new() -> Self {
        Self {
            current: 0,
            mask: 0,
        }
    }

    fn read_bit<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<bool, CodecError> {
        // Previous byte consumed (or none read yet)
        if self.mask == 0 {
            self.current = wire::read_u8(input)?;
            self.mask = 0x80;
        }
        let bit = self.current & self.mask != 0;
        self.mask >>= 1;
        Ok(bit)
    }
}

impl ColumnCodec for BooleanCodec {
    fn write_column<W: Write + ?Sized>(
        &self,
        out: &mut W,
        col: usize,
        rows: &[Row],
    ) -> Result<(), CodecError> {
        let mut bits = BitWriter::new();
        for row in rows {
            match &row[col] {
                // Null: single set bit, no value bit follows
                ScalarValue::Null => bits.push(out, true)?,
                ScalarValue::Boolean(value) => {
                    // Clear null bit, then the value itself
                    bits.push(out, false)?;
                    bits.push(out, *value)?;
                }
                other => return Err(unexpected(LogicalType::Boolean, other)),
            }
        }
        // No stream-length prefix; the reader knows the row count
        bits.finish(out)
    }

    fn read_column<R: Read + ?Sized>(
        &self,
        input: &mut R,
        col: usize,
        rows: &mut [Row],
        _scratch: &mut ColumnScratch,
    ) -> Result<(), CodecError> {
        let mut bits = BitReader::new();
        for row in rows.iter_mut() {
            // Null bit set: the row keeps its pre-filled null
            if bits.read_bit(input)? {
                continue;
            }
            row[col] = ScalarValue::Boolean(bits.read_bit(input)?);
        }
        Ok(())
    }
}
