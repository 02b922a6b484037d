//! crucible-schema: Infer the nested schema for a CSV header
//!
//! Prints the inferred tree with column names left in place of data, so the
//! grouping can be inspected without converting any rows.
//!
//! Usage:
//!   # Read from file, output to stdout
//!   crucible-schema data.csv
//!
//!   # Read from stdin, compact output
//!   cat data.csv | crucible-schema --compact

use anyhow::Result;
use clap::Parser;
use crucible::nest::build;
use crucible::source::CsvTable;
use crucible::NestError;
use std::io::stdin;

#[derive(Parser, Debug)]
#[command(name = "crucible-schema")]
#[command(about = "Infer the nested schema for a CSV header", long_about = None)]
struct Args {
    /// Input CSV file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = if let Some(path) = &args.input {
        CsvTable::from_path(path)?
    } else {
        CsvTable::from_reader(stdin())?
    };
    if table.headers().is_empty() {
        return Err(NestError::MalformedColumnSet("empty header".to_string()).into());
    }

    let tree = build(table.headers());
    let json = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{}", json);

    Ok(())
}
