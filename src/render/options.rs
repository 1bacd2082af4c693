//! Rendering options configuration.

use crate::model::GROUP_SIZE;

/// Options for rendering records.
///
/// The defaults reproduce the table styling word processors paste cleanly:
/// collapsed 1px borders, 10pt text, grey header cells, no wrapping.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fields per group (one group = one table)
    pub group_size: usize,

    /// CSS font size for all cells
    pub font_size: String,

    /// Background color for header cells (CSS color)
    pub header_background: String,

    /// Border color for all cells (CSS color)
    pub border_color: String,

    /// Suppress wrapping inside cells (white-space: nowrap)
    pub nowrap: bool,

    /// Stretch tables to the full available width
    pub full_width: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            group_size: GROUP_SIZE,
            font_size: "10pt".to_string(),
            header_background: "#e5e7eb".to_string(),
            border_color: "#ccc".to_string(),
            nowrap: true,
            full_width: true,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fields per group. Zero is clamped to 1.
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size.max(1);
        self
    }

    /// Set the cell font size.
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    /// Set the header cell background color.
    pub fn with_header_background(mut self, color: impl Into<String>) -> Self {
        self.header_background = color.into();
        self
    }

    /// Set the cell border color.
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Allow cell content to wrap.
    pub fn with_wrapping(mut self, wrap: bool) -> Self {
        self.nowrap = !wrap;
        self
    }
}
