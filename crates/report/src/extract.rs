//! Regression-table extraction.
//!
//! The converted workbook carries many stacked blocks; only two kinds
//! matter here. Odds-ratio regions are bounded by a pair of title rows
//! and yield one [`OddsRatioRow`] per data row between them. Likelihood
//! estimates sit at a fixed column offset below their own title rows and
//! are collected into one flat sequence across every sheet. The assembler
//! zips the two by position, which is sound exactly when both scans walk
//! the report in the same order and find the same number of entries, so a
//! count mismatch aborts the run instead of producing shifted rows.

use crate::error::{ReportError, Result};
use crate::layout::ReportLayout;
use crate::record::{CleanRecord, OddsRatioRow, OUTPUT_HEADER};
use regtab_sheet::{Book, CellValue, Sheet};

/// Pair the i-th region start marker with the i-th end marker.
///
/// Positional pairing is deliberate: real reports emit the blocks strictly
/// alternating, and pairing by index keeps a stray extra marker loud (the
/// count check fails) instead of silently re-anchoring regions.
fn paired_regions(sheet: &Sheet, layout: &ReportLayout) -> Result<Vec<(usize, usize)>> {
    let starts = sheet.rows_containing(&layout.region_start_marker);
    let ends = sheet.rows_containing(&layout.region_end_marker);

    if starts.len() != ends.len() {
        return Err(ReportError::MarkerMismatch {
            starts: starts.len(),
            ends: ends.len(),
        });
    }

    Ok(starts.into_iter().zip(ends).collect())
}

/// Read a cell, treating anything outside the grid as missing.
fn cell_at(sheet: &Sheet, row: usize, col: usize) -> CellValue {
    sheet.get(row, col).map_or(CellValue::Null, Clone::clone)
}

/// Render a confidence limit, keeping the source's missing-value text.
fn limit_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => "nan".to_string(),
        other => other.as_str(),
    }
}

/// Pull one [`OddsRatioRow`] per data row out of each region.
///
/// Rows strictly between the paired markers are candidates; a candidate is
/// a data row only when its index cell (column 0) is present. That drops
/// the gap rows and the column-header row, whose index cell is blank.
fn odds_ratio_rows(
    sheet: &Sheet,
    regions: &[(usize, usize)],
    layout: &ReportLayout,
) -> Vec<OddsRatioRow> {
    let mut rows = Vec::new();

    for &(start, end) in regions {
        for row_index in (start + 1)..end {
            if cell_at(sheet, row_index, 0).is_null() {
                continue;
            }

            let lower = cell_at(sheet, row_index, layout.lower_limit_col);
            let upper = cell_at(sheet, row_index, layout.upper_limit_col);
            rows.push(OddsRatioRow {
                effect: cell_at(sheet, row_index, layout.effect_col),
                point_estimate: cell_at(sheet, row_index, layout.estimate_col),
                confidence_limits: format!("{}, {}", limit_text(&lower), limit_text(&upper)),
            });
        }
    }

    rows
}

/// Collect likelihood-estimate values from every sheet of the workbook.
///
/// For each marker row, reading starts `likelihood_row_offset` rows below
/// at `likelihood_col` and walks down one row at a time. The first missing
/// value, or the edge of the grid, ends that run cleanly.
#[must_use]
pub fn collect_likelihood_values(book: &Book, layout: &ReportLayout) -> Vec<CellValue> {
    let mut values = Vec::new();

    for (name, sheet) in book.sheets() {
        for marker_row in sheet.rows_containing_ci(&layout.likelihood_marker) {
            let run_start = values.len();
            let mut row = marker_row + layout.likelihood_row_offset;

            loop {
                match sheet.get(row, layout.likelihood_col) {
                    Ok(cell) if !cell.is_null() => {
                        values.push(cell.clone());
                        row += 1;
                    }
                    _ => break,
                }
            }

            tracing::debug!(
                "Collected {} likelihood values below row {} of sheet {}",
                values.len() - run_start,
                marker_row,
                name
            );
        }
    }

    values
}

/// Join region rows with likelihood values by position.
fn assemble(rows: Vec<OddsRatioRow>, values: Vec<CellValue>) -> Result<Vec<CleanRecord>> {
    if rows.len() != values.len() {
        return Err(ReportError::LikelihoodCountMismatch {
            records: rows.len(),
            values: values.len(),
        });
    }

    Ok(rows
        .into_iter()
        .zip(values)
        .map(|(row, likelihood)| CleanRecord {
            effect: row.effect,
            point_estimate: row.point_estimate,
            confidence_limits: row.confidence_limits,
            likelihood,
        })
        .collect())
}

/// Extract every clean record from a converted workbook.
///
/// Regions are read from the first sheet only, after whitespace cleanup of
/// a working copy. Likelihood values are collected from all sheets.
pub fn extract_records(book: &Book, layout: &ReportLayout) -> Result<Vec<CleanRecord>> {
    if book.is_empty() {
        return Err(ReportError::EmptyWorkbook);
    }

    let mut primary = book.get_sheet_by_index(0)?.clone();
    primary.trim_strings();

    let regions = paired_regions(&primary, layout)?;
    tracing::debug!("Found {} odds-ratio regions", regions.len());

    let rows = odds_ratio_rows(&primary, &regions, layout);
    let values = collect_likelihood_values(book, layout);

    assemble(rows, values)
}

/// Lay records out as an output sheet: a header row of the four column
/// names, then one row per record.
#[must_use]
pub fn records_sheet(records: &[CleanRecord]) -> Sheet {
    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(
        OUTPUT_HEADER
            .iter()
            .map(|name| CellValue::String((*name).to_string()))
            .collect(),
    );
    for record in records {
        grid.push(record.cells());
    }

    let mut sheet = Sheet::new();
    *sheet.data_mut() = grid;
    sheet
}
