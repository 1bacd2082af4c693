//! Field model structures.

use serde::{Deserialize, Serialize};

/// The field name that marks the reference field.
///
/// A field whose `name` attribute equals this string is laid out in its own
/// single-column table instead of the shared header/value table.
pub const REFERENCE_NAME: &str = "reference";

/// One (name, value) pair extracted from the XML record.
///
/// Fields are created by extraction and immutable afterward. The header comes
/// from the `name` attribute of the `field` element and is absent when the
/// attribute is missing; the value is the element's text content, empty
/// string if there is none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field header from the `name` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Field text content
    #[serde(default)]
    pub value: String,
}

impl Field {
    /// Create a field with a header and value.
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            value: value.into(),
        }
    }

    /// Create a field without a header (missing `name` attribute).
    pub fn anonymous(value: impl Into<String>) -> Self {
        Self {
            header: None,
            value: value.into(),
        }
    }

    /// Create the reference field.
    pub fn reference(value: impl Into<String>) -> Self {
        Self::new(REFERENCE_NAME, value)
    }

    /// Whether this is the reference field. Exact, case-sensitive match.
    pub fn is_reference(&self) -> bool {
        self.header.as_deref() == Some(REFERENCE_NAME)
    }

    /// Header text, empty string when the `name` attribute was absent.
    pub fn header_text(&self) -> &str {
        self.header.as_deref().unwrap_or("")
    }

    /// Check if this field carries no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
