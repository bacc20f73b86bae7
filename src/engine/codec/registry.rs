use std::collections::HashMap;
use std::io::{Read, Write};

use once_cell::sync::Lazy;
use tracing::warn;

use crate::engine::types::{LogicalType, Row};

use super::boolean::BooleanCodec;
use super::column::{ColumnCodec, ColumnScratch};
use super::error::CodecError;
use super::native::{
    BigDecimalValue, BigIntegerValue, ByteValue, CharValue, DateValue, DoubleValue, FloatValue,
    IntegerValue, LongValue, NativeCodec, ShortValue, TimeValue, TimestampValue,
};
use super::object::ObjectCodec;
use super::string::StringValue;

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Maps type names to logical types. Built once, read-only afterwards.
#[derive(Debug)]
pub struct TypeRegistry {
    by_name: HashMap<String, LogicalType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let by_name = LogicalType::ALL
            .iter()
            .map(|ty| (ty.as_str(), *ty))
            .chain(LogicalType::ALIASES)
            .map(|(name, ty)| (name.to_string(), ty))
            .collect();
        Self { by_name }
    }

    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Case-insensitive lookup; `None` for unknown names.
    pub fn lookup(&self, name: &str) -> Option<LogicalType> {
        self.by_name
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// Like [`lookup`](Self::lookup) but unknown or empty names resolve to
    /// the object codec.
    pub fn resolve(&self, name: &str) -> LogicalType {
        match self.lookup(name) {
            Some(ty) => ty,
            None => {
                if !name.trim().is_empty() {
                    warn!(type_name = name, "Unknown type name, using object codec");
                }
                LogicalType::Object
            }
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write_column<W: Write + ?Sized>(
    ty: LogicalType,
    out: &mut W,
    col: usize,
    rows: &[Row],
) -> Result<(), CodecError> {
    match ty {
        LogicalType::String => NativeCodec::<StringValue>::new().write_column(out, col, rows),
        LogicalType::Char => NativeCodec::<CharValue>::new().write_column(out, col, rows),
        LogicalType::Boolean => BooleanCodec.write_column(out, col, rows),
        LogicalType::Byte => NativeCodec::<ByteValue>::new().write_column(out, col, rows),
        LogicalType::Short => NativeCodec::<ShortValue>::new().write_column(out, col, rows),
        LogicalType::Integer => NativeCodec::<IntegerValue>::new().write_column(out, col, rows),
        LogicalType::Long => NativeCodec::<LongValue>::new().write_column(out, col, rows),
        LogicalType::BigInteger => {
            NativeCodec::<BigIntegerValue>::new().write_column(out, col, rows)
        }
        LogicalType::Float => NativeCodec::<FloatValue>::new().write_column(out, col, rows),
        LogicalType::Double => NativeCodec::<DoubleValue>::new().write_column(out, col, rows),
        LogicalType::BigDecimal => {
            NativeCodec::<BigDecimalValue>::new().write_column(out, col, rows)
        }
        LogicalType::Date => NativeCodec::<DateValue>::new().write_column(out, col, rows),
        LogicalType::Time => NativeCodec::<TimeValue>::new().write_column(out, col, rows),
        LogicalType::Timestamp => {
            NativeCodec::<TimestampValue>::new().write_column(out, col, rows)
        }
        LogicalType::Object | LogicalType::Blob | LogicalType::Clob | LogicalType::Xml => {
            ObjectCodec.write_column(out, col, rows)
        }
    }
}

pub fn read_column<R: Read + ?Sized>(
    ty: LogicalType,
    input: &mut R,
    col: usize,
    rows: &mut [Row],
    scratch: &mut ColumnScratch,
) -> Result<(), CodecError> {
    match ty {
        LogicalType::String => {
            NativeCodec::<StringValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Char => NativeCodec::<CharValue>::new().read_column(input, col, rows, scratch),
        LogicalType::Boolean => BooleanCodec.read_column(input, col, rows, scratch),
        LogicalType::Byte => NativeCodec::<ByteValue>::new().read_column(input, col, rows, scratch),
        LogicalType::Short => {
            NativeCodec::<ShortValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Integer => {
            NativeCodec::<IntegerValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Long => NativeCodec::<LongValue>::new().read_column(input, col, rows, scratch),
        LogicalType::BigInteger => {
            NativeCodec::<BigIntegerValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Float => {
            NativeCodec::<FloatValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Double => {
            NativeCodec::<DoubleValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::BigDecimal => {
            NativeCodec::<BigDecimalValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Date => NativeCodec::<DateValue>::new().read_column(input, col, rows, scratch),
        LogicalType::Time => NativeCodec::<TimeValue>::new().read_column(input, col, rows, scratch),
        LogicalType::Timestamp => {
            NativeCodec::<TimestampValue>::new().read_column(input, col, rows, scratch)
        }
        LogicalType::Object | LogicalType::Blob | LogicalType::Clob | LogicalType::Xml => {
            ObjectCodec.read_column(input, col, rows, scratch)
        }
    }
}
