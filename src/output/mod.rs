//! Output renderers: terminal, JSON.

pub mod json;
pub mod terminal;

use crate::picker::PickerView;

/// Trait for rendering a picker snapshot to an output format.
pub trait OutputRenderer {
    /// Render the view to a string.
    fn render(&self, view: &PickerView) -> String;
}
