use std::io::{Read, Write};

use bincode::Options;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::engine::types::{Row, ScalarValue};

use super::column::{ColumnCodec, ColumnScratch};
use super::error::CodecError;

/// Writes every row, nulls included, as a self-delimiting generic payload.
/// Accepts any value, so it never reports a type mismatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectCodec;

impl ColumnCodec for ObjectCodec {
    fn write_column<W: Write + ?Sized>(
        &self,
        out: &mut W,
        col: usize,
        rows: &[Row],
    ) -> Result<(), CodecError> {
        for row in rows {
            marshal(out, &row[col])?;
        }
        Ok(())
    }

    fn read_column<R: Read + ?Sized>(
        &self,
        input: &mut R,
        col: usize,
        rows: &mut [Row],
        scratch: &mut ColumnScratch,
    ) -> Result<(), CodecError> {
        let limit = scratch.limits().max_value_bytes as u64;
        for row in rows.iter_mut() {
            row[col] = unmarshal::<ScalarValue, R>(input, limit)?;
        }
        Ok(())
    }
}

// Fixed-width integers keep the payload layout independent of magnitude.
pub(super) fn marshal<W, T>(out: &mut W, value: &T) -> Result<(), CodecError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .serialize_into(out, value)?;
    Ok(())
}

pub(super) fn unmarshal<T, R>(input: &mut R, limit: u64) -> Result<T, CodecError>
where
    T: DeserializeOwned,
    R: Read + ?Sized,
{
    let value = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(limit)
        .deserialize_from(input)?;
    Ok(value)
}
