//! Intermediate record model.
//!
//! This module defines the data structures that represent an extracted
//! record in a layout-agnostic way. The extractor converts XML into these
//! structures, and renderers convert them to output formats like HTML.

mod field;
mod group;

pub use field::*;
pub use group::*;
