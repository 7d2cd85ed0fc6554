use crate::cell::CellValue;
use crate::error::{Result, SheetError};

/// A sheet representing a 2D grid of cells (row-major storage).
///
/// Rows are not required to share a width: grids produced by stacking
/// blocks of different shapes keep their gap rows empty. Reads past the
/// end of a row behave like reads past the end of the sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    // ===== Row Operations =====

    /// Get an entire row by index (0-based)
    pub fn row(&self, index: usize) -> Result<&Vec<CellValue>> {
        self.data.get(index).ok_or(SheetError::RowIndexOutOfBounds {
            index,
            count: self.row_count(),
        })
    }

    /// Append a row to the end of the sheet
    pub fn row_append<T: Into<CellValue>>(&mut self, data: Vec<T>) -> Result<()> {
        let row: Vec<CellValue> = data.into_iter().map(Into::into).collect();

        // Ensure consistent column count
        if !self.data.is_empty() && row.len() != self.col_count() {
            return Err(SheetError::LengthMismatch {
                expected: self.col_count(),
                actual: row.len(),
            });
        }

        self.data.push(row);
        Ok(())
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }

    /// Get a reference to the raw data
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get a mutable reference to the raw data
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    // ===== Cleaning =====

    /// Strip leading and trailing whitespace from every string cell.
    ///
    /// Non-string values pass through unchanged. Idempotent: trimming a
    /// trimmed sheet is a no-op. A cell that trims down to the empty
    /// string stays a string, it does not become null.
    pub fn trim_strings(&mut self) {
        for row in &mut self.data {
            for cell in row {
                if let CellValue::String(s) = cell {
                    let trimmed = s.trim();
                    if trimmed.len() != s.len() {
                        *cell = CellValue::String(trimmed.to_string());
                    }
                }
            }
        }
    }

    // ===== Marker Scanning =====

    /// Row indices whose string cells contain `needle` (case-sensitive),
    /// in ascending order. Empty when nothing matches.
    #[must_use]
    pub fn rows_containing(&self, needle: &str) -> Vec<usize> {
        self.matching_rows(|text| text.contains(needle))
    }

    /// Row indices whose string cells contain `needle`, ignoring ASCII
    /// case, in ascending order. Empty when nothing matches.
    #[must_use]
    pub fn rows_containing_ci(&self, needle: &str) -> Vec<usize> {
        let needle = needle.to_ascii_lowercase();
        self.matching_rows(|text| text.to_ascii_lowercase().contains(&needle))
    }

    fn matching_rows<F>(&self, is_match: F) -> Vec<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.iter().any(|cell| match cell {
                    CellValue::String(s) => is_match(s),
                    _ => false,
                })
            })
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_fixture() -> Sheet {
        Sheet::from_data(vec![
            vec![
                CellValue::String("Odds Ratio Estimates".to_string()),
                CellValue::Null,
            ],
            vec![
                CellValue::String("ageGroup".to_string()),
                CellValue::Float(1.422),
            ],
            vec![
                CellValue::Int(7),
                CellValue::String("odds ratio estimates".to_string()),
            ],
        ])
    }

    #[test]
    fn test_get_in_bounds() {
        let sheet = Sheet::from_data(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(sheet.get(1, 1).unwrap(), &CellValue::Int(4));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let sheet = Sheet::from_data(vec![vec![1, 2]]);
        assert!(matches!(
            sheet.get(0, 5),
            Err(SheetError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            sheet.get(3, 0),
            Err(SheetError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_row_append_length_mismatch() {
        let mut sheet = Sheet::from_data(vec![vec![1, 2, 3]]);
        let result = sheet.row_append(vec![1, 2]);
        assert!(matches!(result, Err(SheetError::LengthMismatch { .. })));
    }

    #[test]
    fn test_trim_strings() {
        let mut sheet = Sheet::from_data(vec![vec!["  ageGroup ", "kept"]]);
        sheet.trim_strings();
        assert_eq!(
            sheet.get(0, 0).unwrap(),
            &CellValue::String("ageGroup".to_string())
        );
        assert_eq!(
            sheet.get(0, 1).unwrap(),
            &CellValue::String("kept".to_string())
        );
    }

    #[test]
    fn test_trim_strings_is_idempotent() {
        let mut once = Sheet::from_data(vec![vec!["  a  ", " b"], vec!["c ", "  "]]);
        once.trim_strings();
        let mut twice = once.clone();
        twice.trim_strings();
        assert_eq!(once.data(), twice.data());
    }

    #[test]
    fn test_trim_keeps_blank_string_non_null() {
        let mut sheet = Sheet::from_data(vec![vec!["   "]]);
        sheet.trim_strings();
        assert_eq!(
            sheet.get(0, 0).unwrap(),
            &CellValue::String(String::new())
        );
        assert!(!sheet.get(0, 0).unwrap().is_null());
    }

    #[test]
    fn test_rows_containing_case_sensitive() {
        let sheet = marker_fixture();
        assert_eq!(sheet.rows_containing("Odds Ratio Estimates"), vec![0]);
        assert_eq!(sheet.rows_containing("Estimates"), vec![0]);
        assert!(sheet.rows_containing("ODDS RATIO").is_empty());
    }

    #[test]
    fn test_rows_containing_ci() {
        let sheet = marker_fixture();
        assert_eq!(sheet.rows_containing_ci("ODDS ratio estimates"), vec![0, 2]);
    }

    #[test]
    fn test_rows_containing_ascending_and_ignores_non_strings() {
        let sheet = Sheet::from_data(vec![
            vec![CellValue::Int(42)],
            vec![CellValue::String("42 markers".to_string())],
            vec![CellValue::Float(42.0)],
            vec![CellValue::String("another 42".to_string())],
        ]);
        let hits = sheet.rows_containing("42");
        assert_eq!(hits, vec![1, 3]);
        assert!(hits.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rows_containing_empty_when_absent() {
        let sheet = marker_fixture();
        assert!(sheet.rows_containing("Wald").is_empty());
    }

    #[test]
    fn test_col_count_of_ragged_sheet() {
        let mut sheet = Sheet::new();
        sheet.data_mut().push(vec![CellValue::Int(1)]);
        sheet.data_mut().push(Vec::new());
        sheet
            .data_mut()
            .push(vec![CellValue::Null, CellValue::Int(2), CellValue::Int(3)]);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.row_count(), 3);
    }
}
