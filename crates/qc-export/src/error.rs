use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook could not be built or saved.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// More rows than a worksheet holds.
    #[error("Too many rows for one worksheet: {0}")]
    TooManyRows(usize),
}
