//! JSON output renderer.
//!
//! Outputs `{"state": ..., "options": [...], "selected": ..., "avatar": ...}`.

use crate::output::OutputRenderer;
use crate::picker::PickerView;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, view: &PickerView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserOption;
    use crate::picker::PickerState;

    #[test]
    fn render_json() {
        let option = UserOption {
            value: "10".into(),
            label: "Adam".into(),
            avatar: Some("http://x/10.png".into()),
        };
        let view = PickerView {
            state: PickerState::Populated,
            loading_visible: false,
            selector_visible: true,
            options: vec![option.clone()],
            selected: Some(option),
            avatar: Some("http://x/10.png".into()),
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&view)).unwrap();
        assert_eq!(parsed["state"]["state"], "populated");
        assert_eq!(parsed["options"][0]["value"], "10");
        assert_eq!(parsed["selected"]["label"], "Adam");
        assert_eq!(parsed["avatar"], "http://x/10.png");
    }

    #[test]
    fn render_json_failed_state_carries_message() {
        let view = PickerView {
            state: PickerState::Failed("HTTP 500".into()),
            loading_visible: true,
            selector_visible: false,
            options: vec![],
            selected: None,
            avatar: None,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&view)).unwrap();
        assert_eq!(parsed["state"]["state"], "failed");
        assert_eq!(parsed["state"]["detail"], "HTTP 500");
        assert!(parsed["avatar"].is_null());
    }
}
