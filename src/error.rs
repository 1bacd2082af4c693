//! Error types for the fieldtab library.

use std::io;
use thiserror::Error;

/// Result type alias for fieldtab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or rendering a record.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not carry the .xml extension.
    #[error("Unsupported file extension: expected .xml, got {0}")]
    UnsupportedExtension(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the record.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error during text encoding conversion.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error writing to the system clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
