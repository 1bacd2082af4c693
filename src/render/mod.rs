//! Output rendering for extracted records.
//!
//! This module provides renderers for converting Record models to the
//! paste-ready HTML table layout, a plain-text terminal preview, and JSON.
//!
//! # Example
//!
//! ```no_run
//! use fieldtab::{parse_file, render::*};
//!
//! let record = parse_file("export.xml")?;
//!
//! // Render to HTML tables
//! let html = to_html(&record, &RenderOptions::default())?;
//!
//! // Render to a terminal preview
//! let text = to_text(&record, &RenderOptions::default())?;
//!
//! // Render to JSON
//! let json = to_json(&record, JsonFormat::Pretty)?;
//! # Ok::<(), fieldtab::Error>(())
//! ```

mod html;
mod json;
mod options;
mod text;

pub use html::{escape_html, to_html};
pub use json::{to_json, to_json_default, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
