use std::io::{Read, Write};

use tracing::{debug, trace, warn};

use crate::engine::types::{Batch, Row};
use crate::shared::config::Settings;

use super::column::ColumnScratch;
use super::error::CodecError;
use super::limits::CodecLimits;
use super::object::{marshal, unmarshal};
use super::registry::{self, TypeRegistry};
use super::wire;

/// Row count written in place of a batch that does not exist.
pub const NULL_BATCH: i32 = -1;

/// Column-hinted batch wire format:
///
/// ```text
/// row_count:i32            -1 = no batch, 0 = empty (nothing follows)
/// column_count:i32         only when row_count > 0
/// column[0] .. column[C-1] each column's codec region, no separators
/// ```
///
/// Column types are never written; both ends must agree on them. With no
/// type hints at all the whole batch goes through generic marshalling.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSerializer {
    limits: CodecLimits,
}

impl BatchSerializer {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(CodecLimits::from(&settings.codec))
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    pub fn write_batch<W, S>(
        &self,
        out: &mut W,
        column_types: &[S],
        batch: Option<&Batch>,
    ) -> Result<(), CodecError>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        if column_types.is_empty() {
            debug!(
                rows = batch.map(Batch::len),
                "Writing batch without type hints"
            );
            return marshal(out, &batch);
        }

        let Some(batch) = batch else {
            debug!("Writing null batch");
            return wire::write_i32(out, NULL_BATCH);
        };

        let rows = batch.rows();
        let column_count = column_types.len();
        // Nothing is emitted for a ragged batch
        check_shape(rows, column_count)?;

        // Header
        wire::write_len(out, rows.len())?;
        if rows.is_empty() {
            debug!("Writing empty batch");
            return Ok(());
        }
        wire::write_len(out, column_count)?;
        debug!(rows = rows.len(), columns = column_count, "Writing batch");

        // Column regions back to back, in declaration order
        let types = TypeRegistry::global();
        for (col, name) in column_types.iter().enumerate() {
            let name = name.as_ref();
            let ty = types.resolve(name);
            trace!(column = col, logical_type = %ty, "Writing column");
            // Codecs only know the logical type; the diagnostic needs the
            // declared name and the column's values.
            registry::write_column(ty, out, col, rows).map_err(|e| match e {
                CodecError::UnexpectedValue { .. } => type_mismatch(name, col, rows),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Returns `None` for the null batch. Fails without yielding any rows if
    /// the stream ends early or holds malformed data.
    pub fn read_batch<R, S>(
        &self,
        input: &mut R,
        column_types: &[S],
    ) -> Result<Option<Batch>, CodecError>
    where
        R: Read + ?Sized,
        S: AsRef<str>,
    {
        // No hints: the writer marshalled the whole batch in one piece
        if column_types.is_empty() {
            let batch: Option<Batch> = unmarshal(input, self.limits.max_value_bytes as u64)?;
            debug!(
                rows = batch.as_ref().map(Batch::len),
                "Read batch without type hints"
            );
            return Ok(batch);
        }

        // Header
        let row_count = wire::read_i32(input)?;
        if row_count == NULL_BATCH {
            debug!("Read null batch");
            return Ok(None);
        }
        let row_count = usize::try_from(row_count)
            .map_err(|_| CodecError::Corrupt(format!("invalid row count {row_count}")))?;
        if row_count == 0 {
            debug!("Read empty batch");
            return Ok(Some(Batch::empty()));
        }
        self.limits.check_rows(row_count)?;

        let column_count = wire::read_len(input, "column count")?;
        self.limits.check_columns(column_count)?;
        if column_count != column_types.len() {
            return Err(CodecError::Corrupt(format!(
                "batch has {} columns but {} types were supplied",
                column_count,
                column_types.len()
            )));
        }
        // The header alone decides the allocation below, so bound it first
        self.limits.check_cells(row_count, column_count)?;
        debug!(rows = row_count, columns = column_count, "Reading batch");

        // Every cell starts null; column codecs fill in the non-null ones
        let mut batch = Batch::with_nulls(row_count, column_count);
        let mut scratch = ColumnScratch::new(row_count, self.limits);
        let types = TypeRegistry::global();
        for (col, name) in column_types.iter().enumerate() {
            let ty = types.resolve(name.as_ref());
            trace!(column = col, logical_type = %ty, "Reading column");
            registry::read_column(ty, input, col, batch.rows_mut(), &mut scratch)?;
        }
        Ok(Some(batch))
    }

    pub fn encode<S: AsRef<str>>(
        &self,
        column_types: &[S],
        batch: Option<&Batch>,
    ) -> Result<Vec<u8>, CodecError> {
        let mut buffer = Vec::new();
        self.write_batch(&mut buffer, column_types, batch)?;
        Ok(buffer)
    }

    /// Decodes a buffer holding exactly one batch.
    pub fn decode<S: AsRef<str>>(
        &self,
        column_types: &[S],
        data: &[u8],
    ) -> Result<Option<Batch>, CodecError> {
        let mut cursor = data;
        let batch = self.read_batch(&mut cursor, column_types)?;
        if !cursor.is_empty() {
            return Err(CodecError::Corrupt(format!(
                "{} trailing bytes after batch",
                cursor.len()
            )));
        }
        Ok(batch)
    }
}

fn check_shape(rows: &[Row], column_count: usize) -> Result<(), CodecError> {
    if let Some((idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != column_count)
    {
        return Err(CodecError::InvalidBatch(format!(
            "row {} has {} values, expected {}",
            idx,
            row.len(),
            column_count
        )));
    }
    Ok(())
}

// Best effort: the first non-null value is reported, which is not
// necessarily the value that failed in a mixed-type column.
fn type_mismatch(declared: &str, col: usize, rows: &[Row]) -> CodecError {
    let actual = rows
        .iter()
        .map(|row| &row[col])
        .find(|value| !value.is_null())
        .map(|value| value.type_name())
        .unwrap_or("Null");
    warn!(
        column = col,
        declared = declared,
        actual = actual,
        "Column value does not match declared type"
    );
    CodecError::TypeMismatch {
        declared: declared.to_string(),
        column: col,
        actual: actual.to_string(),
    }
}
