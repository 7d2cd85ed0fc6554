//! # regtab-cli
//!
//! Command-line interface for the regtab report pipelines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regtab_report::{convert_report, extract_report, CleanRecord, OUTPUT_HEADER};
use regtab_sheet::CellValue;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// regtab - regression-report table tooling
#[derive(Parser)]
#[command(name = "regtab")]
#[command(author, version, about = "Convert HTML regression reports and extract their tables", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an HTML report into a single-sheet workbook
    Convert {
        /// HTML report to read
        #[arg(value_name = "REPORT")]
        input: PathBuf,

        /// Workbook to write
        #[arg(short, long, default_value = "output.xlsx")]
        output: PathBuf,
    },
    /// Extract regression tables from a converted workbook
    Extract {
        /// Workbook to read
        #[arg(value_name = "WORKBOOK")]
        input: PathBuf,

        /// Workbook to write
        #[arg(short, long, default_value = "regression_tables.xlsx")]
        output: PathBuf,

        /// Do not echo the extracted table
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match cli.command {
        Command::Convert { input, output } => {
            tracing::debug!("Converting {} to {}", input.display(), output.display());
            let summary = convert_report(&input, &output)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
            println!(
                "Wrote {} tables to {}",
                summary.tables,
                output.display()
            );
        }
        Command::Extract {
            input,
            output,
            quiet,
        } => {
            tracing::debug!("Extracting {} to {}", input.display(), output.display());
            let records = extract_report(&input, &output)
                .with_context(|| format!("Failed to extract tables from {}", input.display()))?;
            if !quiet {
                print_records(&records);
            }
            println!("Wrote {} records to {}", records.len(), output.display());
        }
    }

    Ok(())
}

/// Print extracted records as an aligned text table.
fn print_records(records: &[CleanRecord]) {
    if records.is_empty() {
        println!("(no records)");
        return;
    }
    for line in render_records(records) {
        println!("{line}");
    }
}

/// Render records the way a dataframe echo looks: an index column followed
/// by the four output columns, each padded to its widest cell.
fn render_records(records: &[CleanRecord]) -> Vec<String> {
    let mut table: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);

    let mut header = vec![String::new()];
    header.extend(OUTPUT_HEADER.iter().map(|name| (*name).to_string()));
    table.push(header);

    for (index, record) in records.iter().enumerate() {
        let mut row = vec![index.to_string()];
        row.extend(record.cells().iter().map(CellValue::as_str));
        table.push(row);
    }

    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            table
                .iter()
                .filter_map(|row| row.get(col))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    table
        .iter()
        .map(|row| {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            padded.join("  ").trim_end().to_string()
        })
        .collect()
}
