//! Tabular source collaborator: CSV reading
//!
//! Supplies the core with an ordered header and ordered rows of cell
//! strings. Reading is deliberately lenient about row arity; shape
//! mismatches are the materializer's job to report, with the row index
//! attached.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A fully materialized table: ordered column names plus ordered rows
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Read a table from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open CSV file: {}", path.as_ref().display()))?;
        Self::from_reader(file)
    }

    /// Read a table from any byte source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(str::to_owned)
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.context("Failed to read CSV row")?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(CsvTable { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
