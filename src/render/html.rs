//! HTML renderer implementation.
//!
//! Produces the paste-ready layout: per group, one two-row table holding the
//! non-reference fields (header cells over value cells) followed by a
//! separate one-column two-row table for the reference field when the group
//! holds one. Groups are separated by `<br>`.

use crate::error::Result;
use crate::model::{Field, Group, Record};

use super::options::RenderOptions;

/// Convert a Record to HTML tables.
pub fn to_html(record: &Record, options: &RenderOptions) -> Result<String> {
    let groups = record.group_by(options.group_size);
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push_str("<br>");
        }
        render_group(&mut output, group, options);
    }

    Ok(output)
}

fn render_group(output: &mut String, group: &Group, options: &RenderOptions) {
    let regular: Vec<&Field> = group.regular_fields().collect();

    if !regular.is_empty() {
        output.push_str(&table_open(options));

        output.push_str("<tr>");
        for field in &regular {
            output.push_str(&cell(field.header_text(), options, true, options.nowrap));
        }
        output.push_str("</tr>");

        output.push_str("<tr>");
        for field in &regular {
            output.push_str(&cell(&field.value, options, false, options.nowrap));
        }
        output.push_str("</tr></table>");
    }

    // The reference field always gets its own single-column table, with
    // wrapping allowed so long reference text stays readable
    if let Some(reference) = group.reference_field() {
        output.push_str(&table_open(options));
        output.push_str("<tr>");
        output.push_str(&cell(reference.header_text(), options, true, false));
        output.push_str("</tr><tr>");
        output.push_str(&cell(&reference.value, options, false, false));
        output.push_str("</tr></table>");
    }
}

fn table_open(options: &RenderOptions) -> String {
    let width = if options.full_width {
        " width: 100%;"
    } else {
        ""
    };
    format!(
        "<table style=\"border-collapse: collapse;{} margin-bottom: 4px;\">",
        width
    )
}

fn cell(text: &str, options: &RenderOptions, header: bool, nowrap: bool) -> String {
    let mut style = format!("border: 1px solid {}; padding: 2px 4px;", options.border_color);
    if header {
        style.push_str(&format!(" background-color: {};", options.header_background));
    }
    style.push_str(&format!(" font-size: {};", options.font_size));
    if nowrap {
        style.push_str(" white-space: nowrap;");
    }
    format!("<td style=\"{}\">{}</td>", style, escape_html(text))
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
