use crate::shared::config::CodecConfig;
use crate::shared::config::model::{
    DEFAULT_MAX_CELLS, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS, DEFAULT_MAX_VALUE_BYTES,
};

use super::error::CodecError;

/// Bounds checked against lengths read off the wire before anything is
/// allocated for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    pub max_rows: usize,
    pub max_columns: usize,
    /// Rows times columns; bounds the decoded batch as a whole.
    pub max_cells: usize,
    pub max_value_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
            max_cells: DEFAULT_MAX_CELLS,
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

impl From<&CodecConfig> for CodecLimits {
    fn from(cfg: &CodecConfig) -> Self {
        Self {
            max_rows: cfg.max_rows,
            max_columns: cfg.max_columns,
            max_cells: cfg.max_cells,
            max_value_bytes: cfg.max_value_bytes,
        }
    }
}

impl CodecLimits {
    pub fn check_rows(&self, rows: usize) -> Result<(), CodecError> {
        check("row count", rows, self.max_rows)
    }

    pub fn check_columns(&self, columns: usize) -> Result<(), CodecError> {
        check("column count", columns, self.max_columns)
    }

    /// An overflowing product is reported as `usize::MAX`.
    pub fn check_cells(&self, rows: usize, columns: usize) -> Result<(), CodecError> {
        let cells = rows.checked_mul(columns).unwrap_or(usize::MAX);
        check("cell count", cells, self.max_cells)
    }

    pub fn check_value_bytes(&self, bytes: usize) -> Result<(), CodecError> {
        check("value length", bytes, self.max_value_bytes)
    }
}

fn check(what: &'static str, value: usize, limit: usize) -> Result<(), CodecError> {
    if value > limit {
        return Err(CodecError::LimitExceeded { what, value, limit });
    }
    Ok(())
}
