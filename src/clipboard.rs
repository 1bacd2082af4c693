//! System clipboard output.
//!
//! Writes the rendered HTML fragment to the clipboard together with a plain
//! text alternate, so word processors paste tables and terminals paste text.
//! Failures are reported once; there is no retry.

use crate::error::{Error, Result};
use arboard::Clipboard;

/// Copy an HTML fragment to the system clipboard.
///
/// `alt_text` is the plain-text alternate offered to targets that do not
/// accept HTML.
pub fn copy_html(html: &str, alt_text: Option<&str>) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_html(html, alt_text)
        .map_err(|e| Error::Clipboard(e.to_string()))
}

/// Copy plain text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))
}
