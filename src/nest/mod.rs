//! Nested-record inference - build a nested schema from flat column names
//! and fit tabular rows into it
//!
//! This module handles the grouping of delimiter-separated column names
//! (`user_address_city`) into a tree of nested groups, and the
//! materialization of flat rows into independent instances of that tree.
//!
//! The pipeline runs in three steps: [`builder::build`] infers the schema
//! tree from the header, [`paths::leaf_index`] flattens it into a column ->
//! leaf-path mapping, and [`materializer::RecordMaterializer`] fits each row
//! into a fresh copy of the tree.

pub mod builder;
pub mod materializer;
pub mod paths;
pub mod splitter;
pub mod types;
pub mod writer;

pub use builder::build;
pub use materializer::{Materialized, RecordMaterializer};
pub use paths::{leaf_index, LeafIndex};
pub use types::{NestError, RowErrorPolicy, SchemaNode, DELIMITERS};
pub use writer::{save_json, OutputFormat, RecordWriter};
