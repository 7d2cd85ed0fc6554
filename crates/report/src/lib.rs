//! Conversion and extraction pipelines for statistical regression reports.
//!
//! Two independent passes share nothing but the workbook file between
//! them. [`convert_report`] parses an HTML report and stacks every table
//! onto one worksheet. [`extract_report`] reads such a workbook back,
//! pulls the odds-ratio regions and the maximum-likelihood estimates out
//! of it and writes them as one normalized four-column table.

pub mod convert;
pub mod error;
pub mod extract;
pub mod layout;
pub mod record;

use convert::stack_tables;
use error::Result;
use extract::{extract_records, records_sheet};
use regtab_sheet::{Book, Sheet};
use std::path::Path;

/// Convert an HTML report file into a single-sheet workbook.
///
/// A document without tables still produces a workbook with one empty
/// sheet; downstream tooling treats that as a report with nothing in it
/// rather than a failure.
pub fn convert_report<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ConvertSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let html = std::fs::read_to_string(input)?;
    let tables = Sheet::from_html_tables_string(&html)?;
    if tables.is_empty() {
        tracing::warn!("No tables found in {}", input.display());
    }

    let sheet = stack_tables(&tables);
    sheet.save_as_xlsx(output)?;
    tracing::info!(
        "Wrote {} tables ({} sheet rows) to {}",
        tables.len(),
        sheet.row_count(),
        output.display()
    );

    Ok(ConvertSummary {
        tables: tables.len(),
        rows: sheet.row_count(),
    })
}

/// Extract regression tables from a workbook using the default layout.
pub fn extract_report<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<Vec<CleanRecord>> {
    extract_report_with_layout(input, output, &ReportLayout::default())
}

/// Extract regression tables from a workbook file into a new workbook.
///
/// Nothing is written unless extraction succeeds in full, so a structural
/// failure leaves no partial output behind.
pub fn extract_report_with_layout<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    layout: &ReportLayout,
) -> Result<Vec<CleanRecord>> {
    let input = input.as_ref();
    let output = output.as_ref();

    let book = Book::from_xlsx(input)?;
    let records = extract_records(&book, layout)?;

    records_sheet(&records).save_as_xlsx(output)?;
    tracing::info!(
        "Extracted {} records from {} into {}",
        records.len(),
        input.display(),
        output.display()
    );

    Ok(records)
}

// Re-export commonly used types
pub use convert::ConvertSummary;
pub use error::ReportError;
pub use layout::ReportLayout;
pub use record::{CleanRecord, OddsRatioRow, OUTPUT_HEADER};
