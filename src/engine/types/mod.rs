mod batch;
mod scalar;

#[cfg(test)]
mod scalar_test;

use std::fmt;
use std::str::FromStr;

pub use batch::{Batch, Row};
pub use scalar::{Decimal, ScalarValue, Timestamp};

/// Logical column types a batch can be described with. The set is closed:
/// every codec dispatch over it is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    String,
    Char,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    BigInteger,
    Float,
    Double,
    BigDecimal,
    Date,
    Time,
    Timestamp,
    Object,
    Blob,
    Clob,
    Xml,
}

impl LogicalType {
    pub const ALL: [LogicalType; 18] = [
        LogicalType::String,
        LogicalType::Char,
        LogicalType::Boolean,
        LogicalType::Byte,
        LogicalType::Short,
        LogicalType::Integer,
        LogicalType::Long,
        LogicalType::BigInteger,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::BigDecimal,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::Timestamp,
        LogicalType::Object,
        LogicalType::Blob,
        LogicalType::Clob,
        LogicalType::Xml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::String => "string",
            LogicalType::Char => "char",
            LogicalType::Boolean => "boolean",
            LogicalType::Byte => "byte",
            LogicalType::Short => "short",
            LogicalType::Integer => "integer",
            LogicalType::Long => "long",
            LogicalType::BigInteger => "biginteger",
            LogicalType::Float => "float",
            LogicalType::Double => "double",
            LogicalType::BigDecimal => "bigdecimal",
            LogicalType::Date => "date",
            LogicalType::Time => "time",
            LogicalType::Timestamp => "timestamp",
            LogicalType::Object => "object",
            LogicalType::Blob => "blob",
            LogicalType::Clob => "clob",
            LogicalType::Xml => "xml",
        }
    }

    /// Alternative names accepted next to the canonical ones.
    pub const ALIASES: [(&'static str, LogicalType); 9] = [
        ("varchar", LogicalType::String),
        ("character", LogicalType::Char),
        ("bool", LogicalType::Boolean),
        ("tinyint", LogicalType::Byte),
        ("smallint", LogicalType::Short),
        ("int", LogicalType::Integer),
        ("bigint", LogicalType::Long),
        ("real", LogicalType::Float),
        ("decimal", LogicalType::BigDecimal),
    ];

    /// Case-insensitive match against canonical names and aliases.
    pub fn from_name(name: &str) -> Option<LogicalType> {
        let name = name.trim();
        Self::ALL
            .iter()
            .map(|ty| (ty.as_str(), *ty))
            .chain(Self::ALIASES)
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, ty)| ty)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}
