//! Record extraction from flat XML exports.
//!
//! The expected shape is a document containing `row` elements whose direct
//! `field` children carry a `name` attribute and a text value:
//!
//! ```xml
//! <export>
//!   <row>
//!     <field name="case_no">2024-001</field>
//!     <field name="reference">see attachment</field>
//!   </row>
//! </export>
//! ```

use crate::detect::{check_extension, decode_xml_bytes, looks_like_xml};
use crate::error::{Error, Result};
use crate::model::{Field, Record};

/// Parser for flat XML record exports.
pub struct RecordParser {
    content: String,
}

impl RecordParser {
    /// Open an XML file for parsing.
    ///
    /// The extension gate runs first: a non-.xml path is rejected before the
    /// file is read.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        check_extension(path.as_ref())?;
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Create a parser from raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let content = decode_xml_bytes(&data)?;
        if !looks_like_xml(&content) {
            return Err(Error::InvalidData(
                "input does not look like an XML document".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Create a parser from a string.
    pub fn from_str(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Parse the document and return the extracted Record.
    ///
    /// Every `field` element that is a direct child of a `row` element is
    /// collected, in document order, across all `row` elements. The `name`
    /// attribute becomes the header (absent attribute -> no header); the text
    /// content becomes the value (empty element -> empty string). Duplicate
    /// or missing names are not validated.
    pub fn parse(&mut self) -> Result<Record> {
        let mut record = Record::new();

        let mut reader = quick_xml::Reader::from_str(&self.content);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        // Stack of open element local names, used to test "direct child of row"
        let mut stack: Vec<Vec<u8>> = Vec::new();
        let mut current: Option<Field> = None;
        // Depth below the field element currently being collected
        let mut field_depth: u32 = 0;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => {
                    let name = local_name(e.name().as_ref()).to_vec();

                    if current.is_some() {
                        // Nested elements do not start new fields; their text
                        // still contributes to the enclosing value
                        field_depth += 1;
                    } else if name == b"field" && parent_is_row(&stack) {
                        current = Some(Field {
                            header: read_name_attr(e),
                            value: String::new(),
                        });
                        field_depth = 0;
                    }

                    stack.push(name);
                }
                Ok(quick_xml::events::Event::Empty(ref e)) => {
                    let qname = e.name();
                    let name = local_name(qname.as_ref());
                    if current.is_none() && name == b"field" && parent_is_row(&stack) {
                        record.add_field(Field {
                            header: read_name_attr(e),
                            value: String::new(),
                        });
                    }
                }
                Ok(quick_xml::events::Event::Text(ref e)) => {
                    if let Some(ref mut field) = current {
                        let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                        field.value.push_str(&text);
                    }
                }
                Ok(quick_xml::events::Event::CData(ref e)) => {
                    if let Some(ref mut field) = current {
                        field
                            .value
                            .push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Ok(quick_xml::events::Event::End(_)) => {
                    stack.pop();
                    if current.is_some() {
                        if field_depth == 0 {
                            // Closed the collecting field itself
                            if let Some(field) = current.take() {
                                record.add_field(field);
                            }
                        } else {
                            field_depth -= 1;
                        }
                    }
                }
                Ok(quick_xml::events::Event::Eof) => {
                    if !stack.is_empty() {
                        return Err(Error::XmlParse(format!(
                            "unexpected end of document inside <{}>",
                            String::from_utf8_lossy(stack.last().unwrap())
                        )));
                    }
                    break;
                }
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(record)
    }
}

/// Whether the innermost open element is a `row`.
fn parent_is_row(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|n| n.as_slice() == b"row")
}

/// Strip a namespace prefix from a qualified element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Read the `name` attribute from a field element.
fn read_name_attr(e: &quick_xml::events::BytesStart) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"name" {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
