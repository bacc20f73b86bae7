use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Point in time with nanosecond precision. `millis` carries the epoch
/// milliseconds and `nanos` the full nanosecond-of-second; both are kept
/// as-is on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub millis: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn new(millis: i64, nanos: i32) -> Self {
        Self { millis, nanos }
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            millis: dt.timestamp_millis(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }

    /// Returns `None` when the fields do not describe a representable instant.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.millis.div_euclid(1000);
        DateTime::from_timestamp(secs, u32::try_from(self.nanos).ok()?)
    }
}

/// Arbitrary precision decimal: `unscaled * 10^-scale`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    pub unscaled: BigInt,
    pub scale: i32,
}

impl Decimal {
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Null,
    String(String),
    /// A single UTF-16 code unit.
    Char(u16),
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    BigInteger(BigInt),
    Float(f32),
    Double(f64),
    BigDecimal(Decimal),
    /// Epoch milliseconds.
    Date(i64),
    /// Epoch milliseconds.
    Time(i64),
    Timestamp(Timestamp),
    Blob(Vec<u8>),
    Clob(String),
    Xml(String),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Run-time type name, as reported in type-mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "Null",
            ScalarValue::String(_) => "String",
            ScalarValue::Char(_) => "Character",
            ScalarValue::Boolean(_) => "Boolean",
            ScalarValue::Byte(_) => "Byte",
            ScalarValue::Short(_) => "Short",
            ScalarValue::Integer(_) => "Integer",
            ScalarValue::Long(_) => "Long",
            ScalarValue::BigInteger(_) => "BigInteger",
            ScalarValue::Float(_) => "Float",
            ScalarValue::Double(_) => "Double",
            ScalarValue::BigDecimal(_) => "BigDecimal",
            ScalarValue::Date(_) => "Date",
            ScalarValue::Time(_) => "Time",
            ScalarValue::Timestamp(_) => "Timestamp",
            ScalarValue::Blob(_) => "Blob",
            ScalarValue::Clob(_) => "Clob",
            ScalarValue::Xml(_) => "Xml",
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Long(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Double(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ScalarValue::Null)
    }
}
