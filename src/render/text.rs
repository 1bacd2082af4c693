//! Plain text renderer implementation.

use crate::error::Result;
use crate::model::{Field, Record};

use super::options::RenderOptions;

/// Convert a Record to a tab-separated terminal preview.
///
/// Each group becomes a header line over a value line; the reference field
/// follows on its own pair of lines. Groups are separated by a blank line.
pub fn to_text(record: &Record, options: &RenderOptions) -> Result<String> {
    let groups = record.group_by(options.group_size);
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        let regular: Vec<&Field> = group.regular_fields().collect();
        if !regular.is_empty() {
            let headers: Vec<&str> = regular.iter().map(|f| f.header_text()).collect();
            let values: Vec<&str> = regular.iter().map(|f| f.value.as_str()).collect();
            output.push_str(&headers.join("\t"));
            output.push('\n');
            output.push_str(&values.join("\t"));
            output.push('\n');
        }

        if let Some(reference) = group.reference_field() {
            output.push_str(reference.header_text());
            output.push('\n');
            output.push_str(&reference.value);
            output.push('\n');
        }
    }

    Ok(output.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preview_layout() {
        let record = Record::from_fields(vec![
            Field::new("a", "1"),
            Field::new("b", "2"),
            Field::reference("see file"),
        ]);
        let text = to_text(&record, &RenderOptions::default()).unwrap();
        assert_eq!(text, "a\tb\n1\t2\nreference\nsee file");
    }

    #[test]
    fn test_text_groups_blank_line_separated() {
        let record = Record::from_fields(
            (0..9)
                .map(|i| Field::new(format!("f{}", i), format!("v{}", i)))
                .collect(),
        );
        let text = to_text(&record, &RenderOptions::default()).unwrap();
        assert!(text.contains("\n\n"));
        assert!(text.ends_with("v8"));
    }

    #[test]
    fn test_text_empty_record() {
        let text = to_text(&Record::new(), &RenderOptions::default()).unwrap();
        assert!(text.is_empty());
    }
}
