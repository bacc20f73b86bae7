use serde::{Deserialize, Serialize};

use super::ScalarValue;

pub type Row = Vec<ScalarValue>;

/// Rectangular block of rows sharing one column layout.
///
/// The "no batch" case is modelled as `Option<Batch>::None` at the codec
/// boundary, so a `Batch` with zero rows is always a genuine empty batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    rows: Vec<Row>,
}

impl Batch {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rows pre-filled with nulls, ready for column-wise decoding.
    pub fn with_nulls(row_count: usize, column_count: usize) -> Self {
        let rows = (0..row_count)
            .map(|_| vec![ScalarValue::Null; column_count])
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the first row; zero for an empty batch.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn value(&self, row: usize, column: usize) -> Option<&ScalarValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

impl From<Vec<Row>> for Batch {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}
