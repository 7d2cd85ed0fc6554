//! Tabular grid primitives for regtab.
//!
//! A [`Sheet`] is a named, row-major grid of [`CellValue`]s; a [`Book`] is an
//! ordered collection of sheets. On top of the grid the crate provides the
//! three I/O surfaces the report pipelines need: importing every `<table>`
//! from an HTML document, reading a workbook with calamine, and writing one
//! with rust_xlsxwriter.
//!
//! # Examples
//!
//! ## Creating a sheet from data
//!
//! ```
//! use regtab_sheet::{CellValue, Sheet};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Effect", "Estimate"],
//!     vec!["ageGroup", "1.422"],
//! ]);
//!
//! assert_eq!(sheet.row_count(), 2);
//! assert_eq!(sheet.col_count(), 2);
//! ```
//!
//! ## Scanning for marker rows
//!
//! ```
//! use regtab_sheet::Sheet;
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Odds Ratio Estimates"],
//!     vec!["ageGroup"],
//! ]);
//!
//! assert_eq!(sheet.rows_containing("Odds Ratio"), vec![0]);
//! ```

mod book;
mod cell;
mod error;
mod html;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
