pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::codec::{BatchSerializer, CodecError, CodecLimits};
pub use engine::types::{Batch, LogicalType, Row, ScalarValue};
