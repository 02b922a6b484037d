use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Characters treated as word separators when splitting column names
pub const DELIMITERS: [char; 3] = [' ', '_', ','];

/// Check whether a character belongs to the delimiter set
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// A node in an inferred schema tree
///
/// A `Leaf` wraps one original column name; a `Group` holds children keyed
/// by suffix strings derived from column names sharing a common prefix.
/// Group keys keep insertion order so output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Leaf(String),
    Group(IndexMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Instantiate this node as a JSON value, with each leaf carrying its
    /// column name as a placeholder string
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Leaf(column) => Value::String(column.clone()),
            SchemaNode::Group(children) => {
                let mut map = Map::with_capacity(children.len());
                for (key, child) in children {
                    map.insert(key.clone(), child.to_value());
                }
                Value::Object(map)
            }
        }
    }
}

/// How the materializer treats rows that fail to populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowErrorPolicy {
    /// Fail the whole run on the first bad row
    #[default]
    Abort,
    /// Record the failure with its row index and keep going
    Skip,
}

/// Errors produced by schema inference and row materialization
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NestError {
    #[error("cannot process column set: {0}")]
    MalformedColumnSet(String),

    #[error("row {row}: column '{column}' has no leaf path in the inferred schema")]
    PathResolution { row: usize, column: String },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_serializes_as_string() {
        let node = SchemaNode::Leaf("user_name".to_string());
        assert_eq!(serde_json::to_value(&node).unwrap(), json!("user_name"));
    }

    #[test]
    fn test_group_serializes_as_object() {
        let mut children = IndexMap::new();
        children.insert(
            "name".to_string(),
            SchemaNode::Leaf("user_name".to_string()),
        );
        children.insert(
            "email".to_string(),
            SchemaNode::Leaf("user_email".to_string()),
        );
        let node = SchemaNode::Group(children);

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"name": "user_name", "email": "user_email"})
        );
    }

    #[test]
    fn test_to_value_keeps_column_name_placeholders() {
        let mut inner = IndexMap::new();
        inner.insert("b".to_string(), SchemaNode::Leaf("a_b".to_string()));
        let mut children = IndexMap::new();
        children.insert("a".to_string(), SchemaNode::Group(inner));
        children.insert("d".to_string(), SchemaNode::Leaf("d".to_string()));

        let value = SchemaNode::Group(children).to_value();
        assert_eq!(value, json!({"a": {"b": "a_b"}, "d": "d"}));
    }

    #[test]
    fn test_error_messages_carry_row_context() {
        let err = NestError::RowShape {
            row: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 4: expected 3 cells, found 2");

        let err = NestError::PathResolution {
            row: 1,
            column: "ghost".to_string(),
        };
        assert!(err.to_string().contains("ghost"));
    }
}
