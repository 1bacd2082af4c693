//! # fieldtab
//!
//! Convert flat XML record exports to paste-ready HTML tables.
//!
//! This library parses XML documents containing `row > field[name]` elements,
//! slices the extracted fields into fixed-size groups of eight, and renders
//! each group as a two-row HTML table (headers over values). A field named
//! `reference` is laid out in its own single-column table. The result pastes
//! cleanly into word processors, directly or via the system clipboard.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fieldtab::{parse_file, to_html};
//!
//! // Parse with access to the field list
//! let record = parse_file("export.xml")?;
//! println!("Fields: {}", record.len());
//!
//! // Render the HTML tables
//! let html = to_html("export.xml")?;
//! fieldtab::clipboard::copy_html(&html, None)?;
//! # Ok::<(), fieldtab::Error>(())
//! ```
//!
//! ## Lower-level API
//!
//! ```no_run
//! use fieldtab::extract::RecordParser;
//! use fieldtab::render::{self, RenderOptions};
//!
//! let record = RecordParser::open("export.xml")?.parse()?;
//! let options = RenderOptions::new().with_group_size(4);
//! let html = render::to_html(&record, &options)?;
//! # Ok::<(), fieldtab::Error>(())
//! ```
//!
//! ## Features
//!
//! - `clipboard` (default): system clipboard output
//! - `async`: async file I/O with Tokio

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

#[cfg(feature = "clipboard")]
pub mod clipboard;

// Re-exports
pub use detect::{check_extension, decode_xml_bytes, looks_like_xml};
pub use error::{Error, Result};
pub use extract::RecordParser;
pub use model::{Field, Group, Record, GROUP_SIZE, REFERENCE_NAME};

use std::path::Path;

/// Parse an XML record file and return the extracted Record.
///
/// The path must carry the `.xml` extension; anything else is rejected
/// before the file is read.
///
/// # Example
///
/// ```no_run
/// use fieldtab::parse_file;
///
/// let record = parse_file("export.xml")?;
/// println!("Fields: {}", record.len());
/// # Ok::<(), fieldtab::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Record> {
    let mut parser = RecordParser::open(path)?;
    parser.parse()
}

/// Parse a record from raw bytes.
///
/// # Example
///
/// ```no_run
/// use fieldtab::parse_bytes;
///
/// let data = std::fs::read("export.xml")?;
/// let record = parse_bytes(&data)?;
/// # Ok::<(), fieldtab::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Record> {
    let mut parser = RecordParser::from_bytes(data.to_vec())?;
    parser.parse()
}

/// Parse a record from a string.
pub fn parse_str(content: &str) -> Result<Record> {
    RecordParser::from_str(content).parse()
}

/// Convert an XML record file to HTML tables with default options.
///
/// # Example
///
/// ```no_run
/// use fieldtab::to_html;
///
/// let html = to_html("export.xml")?;
/// std::fs::write("output.html", html)?;
/// # Ok::<(), fieldtab::Error>(())
/// ```
pub fn to_html(path: impl AsRef<Path>) -> Result<String> {
    let record = parse_file(path)?;
    render::to_html(&record, &render::RenderOptions::default())
}

/// Convert an XML record file to HTML tables with options.
pub fn to_html_with_options(
    path: impl AsRef<Path>,
    options: &render::RenderOptions,
) -> Result<String> {
    let record = parse_file(path)?;
    render::to_html(&record, options)
}

/// Parse an XML record file asynchronously.
#[cfg(feature = "async")]
pub async fn parse_file_async(path: impl AsRef<Path>) -> Result<Record> {
    check_extension(path.as_ref())?;
    let data = tokio::fs::read(path).await?;
    parse_bytes(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_surface() {
        let record =
            parse_str(r#"<export><row><field name="a">1</field></row></export>"#).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_parse_file_rejects_extension_before_read() {
        // The path does not exist; the extension gate must fire first
        let result = parse_file("/nonexistent/export.csv");
        assert!(matches!(result, Err(Error::UnsupportedExtension(_))));
    }

    #[test]
    fn test_parse_bytes_surface() {
        let record =
            parse_bytes(br#"<export><row><field name="a">1</field></row></export>"#).unwrap();
        assert_eq!(record.fields[0].value, "1");
    }
}
