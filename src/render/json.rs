//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Record;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a Record to JSON.
pub fn to_json(record: &Record, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Compact => serde_json::to_string(record)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e))),
        JsonFormat::Pretty => serde_json::to_string_pretty(record)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e))),
    }
}

/// Convert a Record to JSON with default formatting.
pub fn to_json_default(record: &Record) -> Result<String> {
    to_json(record, JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn test_to_json_pretty() {
        let record = Record::from_fields(vec![Field::new("case_no", "2024-001")]);
        let json = to_json(&record, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"header\": \"case_no\""));
        assert!(json.contains("\"value\": \"2024-001\""));
    }

    #[test]
    fn test_to_json_compact() {
        let record = Record::from_fields(vec![Field::new("a", "1")]);
        let json = to_json(&record, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"header\":\"a\""));
    }

    #[test]
    fn test_record_roundtrip() {
        let record = Record::from_fields(vec![
            Field::new("a", "1"),
            Field::anonymous("loose"),
            Field::reference("ref"),
        ]);

        let json = to_json(&record, JsonFormat::Pretty).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.fields, record.fields);
    }
}
