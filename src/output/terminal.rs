//! Terminal renderer: one line per option, selection marked, avatar below.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::picker::{PickerState, PickerView};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, view: &PickerView) -> String {
        if let PickerState::Failed(ref reason) = view.state {
            return format!("  {} {}\n", "✖".red().bold(), reason.red());
        }
        if !view.selector_visible {
            return format!("  {}\n", "Loading…".dimmed());
        }
        if view.options.is_empty() {
            return format!("  {}\n", "No users.".dimmed());
        }

        let selected_value = view.selected.as_ref().map(|o| o.value.as_str());
        let mut output = String::new();

        for option in &view.options {
            let is_selected = selected_value == Some(option.value.as_str());
            let marker = if is_selected {
                "●".green().bold().to_string()
            } else {
                "○".dimmed().to_string()
            };
            let label = if is_selected {
                option.label.bold().to_string()
            } else {
                option.label.clone()
            };
            output.push_str(&format!(
                "  {marker} {label} {}\n",
                format!("({})", option.value).dimmed()
            ));
        }

        if let Some(selected) = &view.selected {
            output.push('\n');
            match &view.avatar {
                Some(src) => output.push_str(&format!(
                    "  {} {} {}\n",
                    "avatar:".cyan(),
                    selected.label.bold(),
                    src
                )),
                None => output.push_str(&format!(
                    "  {} {} {}\n",
                    "avatar:".cyan(),
                    selected.label.bold(),
                    "(none)".dimmed()
                )),
            }
        }

        output
    }
}
