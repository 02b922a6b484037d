//! # Crucible - CSV nesting toolkit
//!
//! A library for inferring a nested record schema from flat,
//! delimiter-separated column names and casting tabular rows into
//! independent nested JSON documents.
//!
//! ## Modules
//!
//! - **nest**: Infer the schema tree and materialize rows into it
//! - **source**: Read CSV input into an ordered header and rows
//!
//! ## Quick Start
//!
//! ```rust
//! use crucible::nest_rows;
//!
//! # fn main() -> anyhow::Result<()> {
//! let columns: Vec<String> = ["a_b", "a_c", "d"].iter().map(|s| s.to_string()).collect();
//! let rows = vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]];
//!
//! let records = nest_rows(&columns, &rows)?;
//!
//! assert_eq!(records[0]["a"]["b"], "1");
//! assert_eq!(records[0]["d"], "3");
//! # Ok(())
//! # }
//! ```
//!
//! ### Schema only
//!
//! ```rust
//! use crucible::schema;
//!
//! let columns: Vec<String> = ["user_name", "user_email", "id"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! let tree = schema(&columns);
//! // tree groups user_name and user_email under "user"; id stays a leaf
//! ```

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

pub mod nest;
pub mod source;

// Re-export commonly used types for convenience
pub use nest::{
    build, leaf_index, save_json, LeafIndex, Materialized, NestError, OutputFormat,
    RecordMaterializer, RecordWriter, RowErrorPolicy, SchemaNode,
};
pub use source::CsvTable;

/// Infer the nested schema for a set of column names, without data
pub fn schema(columns: &[String]) -> SchemaNode {
    nest::build(columns)
}

/// Main entry point: read a CSV file and nest every row
pub fn autonest<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let table = CsvTable::from_path(path)?;
    nest_rows(table.headers(), table.rows())
}

/// Nest pre-read tabular data: infer the schema once, then materialize each
/// row into its own independent record
pub fn nest_rows(columns: &[String], rows: &[Vec<String>]) -> Result<Vec<Value>> {
    if columns.is_empty() {
        return Err(NestError::MalformedColumnSet("empty header".to_string()).into());
    }

    let tree = nest::build(columns);
    let index = nest::leaf_index(&tree);
    let materializer = RecordMaterializer::new(&tree, &index, columns);
    let materialized = materializer.materialize_all(rows)?;
    Ok(materialized.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_nesting() {
        let columns = names(&["a_b", "a_c", "d"]);
        let rows = vec![names(&["1", "2", "3"])];

        let records = nest_rows(&columns, &rows).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], json!({"a": {"b": "1", "c": "2"}, "d": "3"}));
    }

    #[test]
    fn test_schema_matches_materialized_shape() {
        let columns = names(&["user_name", "user_email", "id"]);
        let tree = schema(&columns);

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({"id": "id", "user": {"email": "user_email", "name": "user_name"}})
        );
    }

    #[test]
    fn test_empty_header_is_rejected() {
        let err = nest_rows(&[], &[]).unwrap_err();
        let nest_err = err.downcast::<NestError>().unwrap();
        assert_eq!(
            nest_err,
            NestError::MalformedColumnSet("empty header".to_string())
        );
    }
}
