//! Row materialization against an inferred schema tree

use serde_json::{Map, Value};

use crate::nest::paths::LeafIndex;
use crate::nest::types::{NestError, RowErrorPolicy, SchemaNode};

/// Materializes tabular rows into independent nested records
///
/// The schema tree is instantiated once as a template; every row gets its
/// own deep copy with cells written at their leaf paths, so mutating one
/// record can never affect another.
pub struct RecordMaterializer<'a> {
    template: Value,
    index: &'a LeafIndex,
    columns: &'a [String],
    policy: RowErrorPolicy,
}

/// Output of a full materialization pass
#[derive(Debug, Default)]
pub struct Materialized {
    pub records: Vec<Value>,
    /// Rows rejected under `RowErrorPolicy::Skip`, with their indexes
    pub skipped: Vec<(usize, NestError)>,
}

impl<'a> RecordMaterializer<'a> {
    pub fn new(tree: &SchemaNode, index: &'a LeafIndex, columns: &'a [String]) -> Self {
        RecordMaterializer {
            template: tree.to_value(),
            index,
            columns,
            policy: RowErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RowErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build one independent record for `row`.
    ///
    /// Cell content is written literally at the column's leaf path; it is
    /// never parsed, coerced, or interpreted.
    pub fn materialize_row(&self, row: &[String], row_index: usize) -> Result<Value, NestError> {
        if row.len() != self.columns.len() {
            return Err(NestError::RowShape {
                row: row_index,
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        let mut record = self.template.clone();
        for (column, cell) in self.columns.iter().zip(row) {
            let path = self.index.get(column).ok_or_else(|| NestError::PathResolution {
                row: row_index,
                column: column.clone(),
            })?;
            assign(&mut record, path, cell);
        }
        Ok(record)
    }

    /// Materialize every row, honoring the configured row-error policy.
    pub fn materialize_all(&self, rows: &[Vec<String>]) -> Result<Materialized, NestError> {
        let mut out = Materialized::default();
        for (i, row) in rows.iter().enumerate() {
            match self.materialize_row(row, i) {
                Ok(record) => out.records.push(record),
                Err(err) => match self.policy {
                    RowErrorPolicy::Abort => return Err(err),
                    RowErrorPolicy::Skip => out.skipped.push((i, err)),
                },
            }
        }
        Ok(out)
    }
}

/// Write `cell` at `path`, creating intermediate objects where needed and
/// overwriting the terminal slot with the literal string.
fn assign(record: &mut Value, path: &[String], cell: &str) {
    let mut cursor = record;
    for key in path {
        if !cursor.is_object() {
            *cursor = Value::Object(Map::new());
        }
        cursor = match cursor {
            Value::Object(map) => map.entry(key.clone()).or_insert(Value::Null),
            _ => return,
        };
    }
    *cursor = Value::String(cell.to_owned());
}
