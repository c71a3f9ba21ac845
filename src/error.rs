//! Error types for pdfoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading an outline and building its tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// The outline structure is corrupted (cycles, runaway nesting).
    #[error("Corrupted outline structure: {0}")]
    Corrupted(String),

    /// A required PDF object is missing.
    #[error("Missing required object: {0}")]
    MissingObject(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
