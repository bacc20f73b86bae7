use std::io::{Read, Write};

use crate::engine::types::{LogicalType, ScalarValue};

use super::column::unexpected;
use super::error::CodecError;
use super::limits::CodecLimits;
use super::native::NativeValue;
use super::wire;

/// Switches a string from one byte per code unit to two.
pub const WIDE_MARKER: u8 = 0x80;

/// UTF-16 code unit count, then each unit as a single byte while below 0x80.
/// The first unit at or above 0x80 is preceded by [`WIDE_MARKER`] and it and
/// every later unit of the same string are written as two bytes.
pub struct StringValue;

impl StringValue {
    pub fn write_str<W: Write + ?Sized>(s: &str, out: &mut W) -> Result<(), CodecError> {
        let units: Vec<u16> = s.encode_utf16().collect();
        // Length counts code units, not bytes
        wire::write_len(out, units.len())?;

        let mut wide = false;
        for unit in units {
            // Narrow mode ends at the first unit that does not fit in 7 bits;
            // the marker is written once and there is no way back.
            if !wide && unit >= u16::from(WIDE_MARKER) {
                wide = true;
                wire::write_u8(out, WIDE_MARKER)?;
            }
            if wide {
                wire::write_u16(out, unit)?;
            } else {
                wire::write_u8(out, unit as u8)?;
            }
        }
        Ok(())
    }

    pub fn read_string<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<String, CodecError> {
        let len = wire::read_len(input, "string length")?;
        // Worst case every unit is wide
        limits.check_value_bytes(len.saturating_mul(2))?;

        let mut units = Vec::with_capacity(len);
        let mut wide = false;
        for _ in 0..len {
            if !wide {
                let byte = wire::read_u8(input)?;
                if byte != WIDE_MARKER {
                    units.push(u16::from(byte));
                    continue;
                }
                // Marker consumed; this unit and the rest are two bytes each
                wide = true;
            }
            units.push(wire::read_u16(input)?);
        }

        String::from_utf16(&units)
            .map_err(|e| CodecError::Corrupt(format!("invalid UTF-16 string: {e}")))
    }
}

impl NativeValue for StringValue {
    const TYPE: LogicalType = LogicalType::String;

    fn encode<W: Write + ?Sized>(value: &ScalarValue, out: &mut W) -> Result<(), CodecError> {
        match value {
            ScalarValue::String(s) => Self::write_str(s, out),
            other => Err(unexpected(Self::TYPE, other)),
        }
    }

    fn decode<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<ScalarValue, CodecError> {
        Ok(ScalarValue::String(Self::read_string(input, limits)?))
    }
}
