mod batch_codec;
mod bitmap;
mod boolean;
mod column;
mod error;
mod limits;
mod native;
mod object;
mod registry;
mod string;
pub mod wire;


pub use batch_codec::{BatchSerializer, NULL_BATCH};
pub use bitmap::NullBitmap;
pub use boolean::BooleanCodec;
pub use column::{ColumnCodec, ColumnScratch};
pub use error::CodecError;
pub use limits::CodecLimits;
pub use native::{
    BigDecimalValue, BigIntegerValue, ByteValue, CharValue, DateValue, DoubleValue, FloatValue,
    IntegerValue, LongValue, NativeCodec, NativeValue, ShortValue, TimeValue, TimestampValue,
};
pub use object::ObjectCodec;
pub use registry::TypeRegistry;
pub use string::{StringValue, WIDE_MARKER};
