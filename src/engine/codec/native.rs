use std::io::{Read, Write};
use std::marker::PhantomData;

use num_bigint::BigInt;

use crate::engine::types::{Decimal, LogicalType, Row, ScalarValue, Timestamp};

use super::bitmap::NullBitmap;
use super::column::{ColumnCodec, ColumnScratch, unexpected};
use super::error::CodecError;
use super::limits::CodecLimits;
use super::wire;

/// Encoding of a single non-null value of one logical type.
pub trait NativeValue {
    const TYPE: LogicalType;

    /// Fails with [`CodecError::UnexpectedValue`] when `value` is not of
    /// this type. Never called for nulls.
    fn encode<W: Write + ?Sized>(value: &ScalarValue, out: &mut W) -> Result<(), CodecError>;

    fn decode<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<ScalarValue, CodecError>;
}

/// Null bitmap over all rows, then one encoded value per non-null row.
pub struct NativeCodec<T>(PhantomData<T>);

impl<T> NativeCodec<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for NativeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NativeValue> ColumnCodec for NativeCodec<T> {
    fn write_column<W: Write + ?Sized>(
        &self,
        out: &mut W,
        col: usize,
        rows: &[Row],
    ) -> Result<(), CodecError> {
        NullBitmap::write_column(out, col, rows)?;
        // Nulls are fully described by the bitmap and take no value slot
        for row in rows {
            let value = &row[col];
            if !value.is_null() {
                T::encode(value, out)?;
            }
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
        // Bitmap buffer is reused across the columns of one batch
        NullBitmap::read_into(input, scratch.null_bitmap_mut())?;
        for (idx, row) in rows.iter_mut().enumerate() {
            if !NullBitmap::is_null(scratch.null_bitmap(), idx) {
                row[col] = T::decode(input, scratch.limits())?;
            }
        }
        Ok(())
    }
}

macro_rules! fixed_width_value {
    ($(#[$doc:meta])* $name:ident, $ty:ident, $variant:ident, $write:ident, $read:ident) => {
        $(#[$doc])*
        pub struct $name;

        impl NativeValue for $name {
            const TYPE: LogicalType = LogicalType::$ty;

            fn encode<W: Write + ?Sized>(
                value: &ScalarValue,
                out: &mut W,
            ) -> Result<(), CodecError> {
                match value {
                    ScalarValue::$variant(v) => wire::$write(out, *v),
                    other => Err(unexpected(Self::TYPE, other)),
                }
            }

            fn decode<R: Read + ?Sized>(
                input: &mut R,
                _limits: &CodecLimits,
            ) -> Result<ScalarValue, CodecError> {
                Ok(ScalarValue::$variant(wire::$read(input)?))
            }
        }
    };
}

fixed_width_value!(ByteValue, Byte, Byte, write_i8, read_i8);
fixed_width_value!(ShortValue, Short, Short, write_i16, read_i16);
fixed_width_value!(IntegerValue, Integer, Integer, write_i32, read_i32);
fixed_width_value!(LongValue, Long, Long, write_i64, read_i64);
fixed_width_value!(FloatValue, Float, Float, write_f32, read_f32);
fixed_width_value!(DoubleValue, Double, Double, write_f64, read_f64);
fixed_width_value!(
    /// One UTF-16 code unit.
    CharValue, Char, Char, write_u16, read_u16
);
fixed_width_value!(
    /// Epoch milliseconds.
    DateValue, Date, Date, write_i64, read_i64
);
fixed_width_value!(
    /// Epoch milliseconds.
    TimeValue, Time, Time, write_i64, read_i64
);

/// Epoch milliseconds (i64) followed by nanosecond-of-second (i32).
pub struct TimestampValue;

impl NativeValue for TimestampValue {
    const TYPE: LogicalType = LogicalType::Timestamp;

    fn encode<W: Write + ?Sized>(value: &ScalarValue, out: &mut W) -> Result<(), CodecError> {
        match value {
            ScalarValue::Timestamp(ts) => {
                wire::write_i64(out, ts.millis)?;
                wire::write_i32(out, ts.nanos)
            }
            other => Err(unexpected(Self::TYPE, other)),
        }
    }

    fn decode<R: Read + ?Sized>(
        input: &mut R,
        _limits: &CodecLimits,
    ) -> Result<ScalarValue, CodecError> {
        let millis = wire::read_i64(input)?;
        let nanos = wire::read_i32(input)?;
        Ok(ScalarValue::Timestamp(Timestamp { millis, nanos }))
    }
}

/// Length-prefixed minimal big-endian two's-complement bytes.
pub struct BigIntegerValue;

impl BigIntegerValue {
    fn write_bigint<W: Write + ?Sized>(value: &BigInt, out: &mut W) -> Result<(), CodecError> {
        let bytes = value.to_signed_bytes_be();
        wire::write_len(out, bytes.len())?;
        out.write_all(&bytes)?;
        Ok(())
    }

    fn read_bigint<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<BigInt, CodecError> {
        let len = wire::read_len(input, "big integer length")?;
        limits.check_value_bytes(len)?;
        let bytes = wire::read_vec(input, len)?;
        Ok(BigInt::from_signed_bytes_be(&bytes))
    }
}

impl NativeValue for BigIntegerValue {
    const TYPE: LogicalType = LogicalType::BigInteger;

    fn encode<W: Write + ?Sized>(value: &ScalarValue, out: &mut W) -> Result<(), CodecError> {
        match value {
            ScalarValue::BigInteger(v) => Self::write_bigint(v, out),
            other => Err(unexpected(Self::TYPE, other)),
        }
    }

    fn decode<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<ScalarValue, CodecError> {
        Ok(ScalarValue::BigInteger(Self::read_bigint(input, limits)?))
    }
}

/// Scale (i32) followed by the unscaled value as a big integer.
pub struct BigDecimalValue;

impl NativeValue for BigDecimalValue {
    const TYPE: LogicalType = LogicalType::BigDecimal;

    fn encode<W: Write + ?Sized>(value: &ScalarValue, out: &mut W) -> Result<(), CodecError> {
        match value {
            ScalarValue::BigDecimal(d) => {
                wire::write_i32(out, d.scale)?;
                BigIntegerValue::write_bigint(&d.unscaled, out)
            }
            other => Err(unexpected(Self::TYPE, other)),
        }
    }

    fn decode<R: Read + ?Sized>(
        input: &mut R,
        limits: &CodecLimits,
    ) -> Result<ScalarValue, CodecError> {
        let scale = wire::read_i32(input)?;
        let unscaled = BigIntegerValue::read_bigint(input, limits)?;
        Ok(ScalarValue::BigDecimal(Decimal { unscaled, scale }))
    }
}
