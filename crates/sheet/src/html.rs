//! HTML table import.
//!
//! Statistical report generators emit one `<table>` per output block, and
//! lean on spans: header cells cover several columns (a "95% Wald
//! Confidence Limits" header sits above two value columns) and stub cells
//! cover several rows. Both `colspan` and `rowspan` are expanded by
//! duplicating the value into every grid cell the span covers, so the
//! imported grid stays rectangular and positions stay addressable.
//!
//! `<th>` content is always imported as text; `<td>` content goes through
//! [`CellValue::parse`] type inference. Nested markup inside a cell is
//! flattened to its concatenated text.

use crate::{CellValue, Result, Sheet};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// Read a span attribute, defaulting to 1 when absent or unparseable.
fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

/// Parse a single `<table>` element into a rectangular grid.
fn parse_table(table: ElementRef<'_>) -> Result<Sheet> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    // Cells spilled into later rows by rowspan, keyed by (row, col).
    let mut spill: HashMap<(usize, usize), CellValue> = HashMap::new();
    let mut grid: Vec<Vec<CellValue>> = Vec::new();

    for (row_index, tr) in table.select(&row_selector).enumerate() {
        let mut row: Vec<CellValue> = Vec::new();

        for cell in tr.select(&cell_selector) {
            // Slots claimed by earlier rowspans come before this cell.
            while let Some(value) = spill.remove(&(row_index, row.len())) {
                row.push(value);
            }

            let text: String = cell.text().collect::<String>().trim().to_string();
            let value = if cell.value().name() == "th" {
                CellValue::String(text)
            } else {
                CellValue::parse(&text)
            };

            let rowspan = span(cell, "rowspan");
            for _ in 0..span(cell, "colspan") {
                let col = row.len();
                for below in 1..rowspan {
                    spill.insert((row_index + below, col), value.clone());
                }
                row.push(value.clone());
            }
        }

        // Drain whatever rowspans still claim in this row, in column
        // order. Overlapping spans are malformed markup; a claim under a
        // column the row spelled out itself is dropped, a claim past the
        // row's end lands at its column with null fillers for the gap.
        let mut claimed: Vec<usize> = spill
            .keys()
            .filter(|(r, _)| *r == row_index)
            .map(|(_, col)| *col)
            .collect();
        claimed.sort_unstable();
        for col in claimed {
            if let Some(value) = spill.remove(&(row_index, col)) {
                if col >= row.len() {
                    row.resize(col, CellValue::Null);
                    row.push(value);
                }
            }
        }

        if !row.is_empty() {
            grid.push(row);
        }
    }

    // Pad ragged rows so the grid is rectangular.
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut sheet = Sheet::new();
    for mut row in grid {
        row.resize(width, CellValue::Null);
        sheet.row_append(row)?;
    }

    Ok(sheet)
}

impl Sheet {
    /// Parse every `<table>` element of an HTML document, in document
    /// order.
    ///
    /// A document without tables yields an empty vector; the caller
    /// decides whether that is an error.
    pub fn from_html_tables_string(html: &str) -> Result<Vec<Sheet>> {
        let document = Html::parse_document(html);
        let table_selector = Selector::parse("table").unwrap();

        document.select(&table_selector).map(parse_table).collect()
    }
}
