//! HTML report to workbook conversion.
//!
//! A statistical report arrives as one HTML document holding many small
//! tables. Conversion parses every table and stacks them onto a single
//! worksheet in document order, each block separated from the next by a
//! fixed gap so the blocks stay visually distinct and their positions stay
//! predictable for the extractor.

use regtab_sheet::{CellValue, Sheet};

/// Rows the write cursor advances past a block's data rows. One row is
/// consumed by the next block's header, leaving a two-row visible gap.
pub const BLOCK_GAP_ROWS: usize = 3;

/// What a conversion run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Tables found in the source document.
    pub tables: usize,
    /// Rows occupied on the output sheet.
    pub rows: usize,
}

/// Stack parsed tables onto one sheet.
///
/// Each table is written as a header row (its first row, behind a blank
/// index cell) followed by its data rows, each prefixed with a 0-based
/// index. After a table with `n` data rows the write cursor advances by
/// `n + BLOCK_GAP_ROWS`, so each block starts at the sum of those
/// advances over the tables before it.
#[must_use]
pub fn stack_tables(tables: &[Sheet]) -> Sheet {
    let mut grid: Vec<Vec<CellValue>> = Vec::new();
    let mut cursor = 0usize;

    for table in tables {
        while grid.len() < cursor {
            grid.push(Vec::new());
        }

        let mut rows = table.rows();
        if let Some(header) = rows.next() {
            let mut out = Vec::with_capacity(header.len() + 1);
            out.push(CellValue::Null);
            out.extend(header.iter().cloned());
            grid.push(out);
        }
        for (index, row) in (0i64..).zip(rows) {
            let mut out = Vec::with_capacity(row.len() + 1);
            out.push(CellValue::Int(index));
            out.extend(row.iter().cloned());
            grid.push(out);
        }

        let data_rows = table.row_count().saturating_sub(1);
        cursor += data_rows + BLOCK_GAP_ROWS;
    }

    let mut sheet = Sheet::new();
    *sheet.data_mut() = grid;
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> Sheet {
        Sheet::from_data(rows)
    }

    #[test]
    fn test_blocks_start_at_cumulative_offsets() {
        // Data-row counts 3 and 5. The second block must start at
        // (3 + gap) and the third at (3 + gap) + (5 + gap).
        let tables = vec![
            table(vec![
                vec!["Effect", "Estimate"],
                vec!["a", "1"],
                vec!["b", "2"],
                vec!["c", "3"],
            ]),
            table(vec![
                vec!["Criterion", "Value"],
                vec!["AIC", "311"],
                vec!["SC", "325"],
                vec!["-2LogL", "303"],
                vec!["d", "4"],
                vec!["e", "5"],
            ]),
            table(vec![vec!["Tail", "Block"]]),
        ];

        let sheet = stack_tables(&tables);

        assert_eq!(
            sheet.get(0, 1).unwrap(),
            &CellValue::String("Effect".to_string())
        );
        assert_eq!(
            sheet.get(6, 1).unwrap(),
            &CellValue::String("Criterion".to_string())
        );
        assert_eq!(
            sheet.get(14, 1).unwrap(),
            &CellValue::String("Tail".to_string())
        );
    }

    #[test]
    fn test_header_row_has_blank_index_cell() {
        let sheet = stack_tables(&[table(vec![vec!["Effect"], vec!["ageGroup"]])]);

        assert!(sheet.get(0, 0).unwrap().is_null());
        assert_eq!(
            sheet.get(0, 1).unwrap(),
            &CellValue::String("Effect".to_string())
        );
    }

    #[test]
    fn test_data_rows_get_contiguous_indices() {
        let sheet = stack_tables(&[table(vec![
            vec!["Effect"],
            vec!["ageGroup"],
            vec!["sex"],
            vec!["race"],
        ])]);

        assert_eq!(sheet.get(1, 0).unwrap(), &CellValue::Int(0));
        assert_eq!(sheet.get(2, 0).unwrap(), &CellValue::Int(1));
        assert_eq!(sheet.get(3, 0).unwrap(), &CellValue::Int(2));
    }

    #[test]
    fn test_gap_rows_are_empty() {
        let sheet = stack_tables(&[
            table(vec![vec!["h"], vec!["x"]]),
            table(vec![vec!["h2"], vec!["y"]]),
        ]);

        // Block 1 occupies rows 0-1, block 2 starts at 1 + 3 = 4.
        assert!(sheet.row(2).unwrap().is_empty());
        assert!(sheet.row(3).unwrap().is_empty());
        assert_eq!(
            sheet.get(4, 1).unwrap(),
            &CellValue::String("h2".to_string())
        );
    }

    #[test]
    fn test_header_only_table_still_advances_cursor() {
        let sheet = stack_tables(&[
            table(vec![vec!["Odds Ratio Estimates"]]),
            table(vec![vec!["Effect"], vec!["ageGroup"]]),
        ]);

        // Header-only block at row 0, zero data rows, next block at 0 + 3.
        assert_eq!(
            sheet.get(0, 1).unwrap(),
            &CellValue::String("Odds Ratio Estimates".to_string())
        );
        assert_eq!(
            sheet.get(3, 1).unwrap(),
            &CellValue::String("Effect".to_string())
        );
    }

    #[test]
    fn test_no_tables_gives_empty_sheet() {
        let sheet = stack_tables(&[]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.name(), "Sheet1");
    }
}
