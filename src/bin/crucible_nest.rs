//! crucible-nest: Cast flat CSV rows into nested JSON documents
//!
//! Usage:
//!   # Read from file, write a pretty JSON array to a file
//!   crucible-nest data.csv -o data.json
//!
//!   # Read from stdin, write to stdout
//!   cat data.csv | crucible-nest
//!
//!   # One record per line, skipping rows that fail to materialize
//!   crucible-nest data.csv --ndjson --skip-bad-rows

// Use MiMalloc allocator for better performance on large row sets
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use crucible::nest::{build, leaf_index, OutputFormat, RecordMaterializer, RecordWriter, RowErrorPolicy};
use crucible::source::CsvTable;
use crucible::NestError;
use std::fs::File;
use std::io::{stdin, BufWriter};

#[derive(Parser, Debug)]
#[command(name = "crucible-nest")]
#[command(about = "Cast flat CSV rows into nested JSON documents", long_about = None)]
struct Args {
    /// Input CSV file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output JSON file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Write one record per line instead of a JSON array
    #[arg(long)]
    ndjson: bool,

    /// Compact array output (no pretty-printing)
    #[arg(long, conflicts_with = "ndjson")]
    compact: bool,

    /// Skip rows that fail to materialize instead of aborting
    #[arg(long)]
    skip_bad_rows: bool,
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

    eprintln!(
        "Inferring schema from {} columns...",
        table.headers().len()
    );
    let tree = build(table.headers());
    let index = leaf_index(&tree);

    let policy = if args.skip_bad_rows {
        RowErrorPolicy::Skip
    } else {
        RowErrorPolicy::Abort
    };
    let materializer = RecordMaterializer::new(&tree, &index, table.headers()).with_policy(policy);
    let materialized = materializer.materialize_all(table.rows())?;

    for (_, err) in &materialized.skipped {
        eprintln!("Skipped {}", err);
    }

    let format = if args.ndjson {
        OutputFormat::Ndjson
    } else if args.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        let mut writer = RecordWriter::new(BufWriter::new(file), format);
        writer.write_records(&materialized.records)?;
        writer.flush()?;
        eprintln!(
            "Conversion complete! {} records written to {}",
            materialized.records.len(),
            path
        );
    } else {
        let stdout = std::io::stdout();
        let mut writer = RecordWriter::new(stdout.lock(), format);
        writer.write_records(&materialized.records)?;
        writer.flush()?;
    }

    Ok(())
}
