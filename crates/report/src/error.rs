use regtab_sheet::SheetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Found {starts} region start markers but {ends} end markers")]
    MarkerMismatch { starts: usize, ends: usize },

    #[error("Extracted {records} effect rows but collected {values} likelihood values")]
    LikelihoodCountMismatch { records: usize, values: usize },

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
