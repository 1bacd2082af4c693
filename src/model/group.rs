//! Record and group model structures.

use super::Field;
use serde::{Deserialize, Serialize};

/// Default number of fields per group.
pub const GROUP_SIZE: usize = 8;

/// A fixed-size window over the flat field list used for table layout.
///
/// Group boundaries are purely positional: every `group_size` fields start a
/// new group regardless of field semantics, so the reference field lands in
/// whichever group its position falls into. The last group may be shorter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// Fields in this group, in extraction order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Group {
    /// Create a group from a slice of fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Whether this group contains the reference field.
    pub fn has_reference(&self) -> bool {
        self.fields.iter().any(|f| f.is_reference())
    }

    /// The non-reference fields, in order.
    pub fn regular_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_reference())
    }

    /// The reference field, if this group holds one.
    pub fn reference_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_reference())
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An extracted record: the flat ordered field list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    /// Fields in document order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from a field list.
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Add a field to the record.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the record contains a reference field.
    pub fn has_reference(&self) -> bool {
        self.fields.iter().any(|f| f.is_reference())
    }

    /// Slice the field list into positional groups of `size` fields.
    ///
    /// Produces `ceil(len / size)` groups; the last one may be shorter.
    /// A size of 0 is clamped to 1.
    pub fn group_by(&self, size: usize) -> Vec<Group> {
        let size = size.max(1);
        self.fields
            .chunks(size)
            .map(|chunk| Group::new(chunk.to_vec()))
            .collect()
    }

    /// Slice into groups of the default size.
    pub fn groups(&self) -> Vec<Group> {
        self.group_by(GROUP_SIZE)
    }

    /// Rebuild the flat field list from a group sequence.
    pub fn flatten(groups: &[Group]) -> Vec<Field> {
        groups.iter().flat_map(|g| g.fields.clone()).collect()
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
