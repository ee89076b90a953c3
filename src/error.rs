//! Error types for the docx_helper library.

use std::io;
use thiserror::Error;

/// Result type alias for docx_helper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or serializing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the generated file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The OOXML serializer rejected the document description.
    #[error("DOCX serialization error: {0}")]
    Docx(#[from] docx_rs::DocxError),

    /// A table row does not match the header row in length.
    #[error("table row {row} has {found} cells, expected {expected}")]
    RaggedTableRow {
        /// Zero-based index of the offending body row.
        row: usize,
        /// Number of columns declared by the header row.
        expected: usize,
        /// Number of cells actually present in the row.
        found: usize,
    },

    /// A table was declared without any header columns.
    #[error("table requires at least one header column")]
    EmptyTableHeader,
}
