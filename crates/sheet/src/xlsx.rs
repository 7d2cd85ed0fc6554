//! XLSX read and write.
//!
//! Reading goes through calamine. calamine reports only the used range of
//! a worksheet, so a range that starts below row 0 or right of column A is
//! padded back out with empty rows and null cells. The extractors address
//! cells by absolute position, and the padding keeps grid indices equal to
//! the row and column numbers a spreadsheet UI would show.
//!
//! Writing goes through rust_xlsxwriter. Null cells are left unwritten.

use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn xlsx_error<E: std::fmt::Display>(err: E) -> SheetError {
    SheetError::Xlsx(err.to_string())
}

/// Convert a calamine cell into a [`CellValue`].
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        // Excel stores dates as day serials since 1899-12-30.
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// Expand a used range into a grid with absolute row and column indices.
fn range_to_grid(range: &calamine::Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Vec<Vec<CellValue>> = Vec::with_capacity(first_row as usize + range.height());
    for _ in 0..first_row {
        grid.push(Vec::new());
    }
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; first_col as usize];
        cells.extend(row.iter().map(data_to_cell_value));
        grid.push(cells);
    }

    grid
}

/// Write sheet cells into a worksheet. Null cells stay unwritten.
fn write_into(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<()> {
    worksheet.set_name(sheet.name()).map_err(xlsx_error)?;

    for (row_index, row) in sheet.rows().enumerate() {
        let row_number = u32::try_from(row_index)
            .map_err(|_| SheetError::Xlsx(format!("row {row_index} exceeds the xlsx row limit")))?;
        for (col_index, cell) in row.iter().enumerate() {
            let col_number = u16::try_from(col_index).map_err(|_| {
                SheetError::Xlsx(format!("column {col_index} exceeds the xlsx column limit"))
            })?;
            match cell {
                CellValue::Null => {}
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_number, col_number, *b)
                        .map_err(xlsx_error)?;
                }
                // Excel keeps every number as f64; very large integers
                // lose precision on the way through.
                CellValue::Int(i) => {
                    worksheet
                        .write_number(row_number, col_number, *i as f64)
                        .map_err(xlsx_error)?;
                }
                CellValue::Float(f) => {
                    worksheet
                        .write_number(row_number, col_number, *f)
                        .map_err(xlsx_error)?;
                }
                CellValue::String(s) => {
                    worksheet
                        .write_string(row_number, col_number, s)
                        .map_err(xlsx_error)?;
                }
            }
        }
    }

    Ok(())
}

impl Sheet {
    /// Save the sheet to an Excel file as the only worksheet.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        write_into(workbook.add_worksheet(), self)?;
        workbook.save(path.as_ref()).map_err(xlsx_error)?;
        Ok(())
    }
}

impl Book {
    /// Load every worksheet of an Excel file, preserving workbook order.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(xlsx_error)?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(xlsx_error)?;
            let mut sheet = Sheet::with_name(&sheet_name);
            *sheet.data_mut() = range_to_grid(&range);
            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file, one worksheet per sheet.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        for (_, sheet) in self.sheets() {
            write_into(workbook.add_worksheet(), sheet)?;
        }
        workbook.save(path.as_ref()).map_err(xlsx_error)?;
        Ok(())
    }
}
