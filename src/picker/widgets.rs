//! In-memory UI handles.
//!
//! Each handle is a cheap clone over shared state, like an element
//! reference: the host keeps one clone to inspect or render while the
//! picker owns another.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::UserOption;
use crate::picker::{AvatarImage, LoadingIndicator, UserSelector};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
struct IndicatorState {
    visible: bool,
    error: Option<String>,
}

/// Loading indicator. Visible by default.
#[derive(Debug, Clone)]
pub struct Indicator {
    inner: Arc<Mutex<IndicatorState>>,
}

impl Indicator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(IndicatorState {
                visible: true,
                error: None,
            })),
        }
    }

    /// The error message currently displayed, if any.
    pub fn error(&self) -> Option<String> {
        lock(&self.inner).error.clone()
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator for Indicator {
    fn show(&mut self) {
        let mut state = lock(&self.inner);
        state.visible = true;
        state.error = None;
    }

    fn hide(&mut self) {
        lock(&self.inner).visible = false;
    }

    fn show_error(&mut self, message: &str) {
        let mut state = lock(&self.inner);
        state.visible = true;
        state.error = Some(message.to_string());
    }

    fn is_visible(&self) -> bool {
        lock(&self.inner).visible
    }
}

#[derive(Debug, Default)]
struct DropdownState {
    visible: bool,
    options: Vec<UserOption>,
    selected: Option<usize>,
}

/// Selector with options in insertion order. Hidden by default.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    inner: Arc<Mutex<DropdownState>>,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserSelector for Dropdown {
    fn append_option(&mut self, option: UserOption) {
        lock(&self.inner).options.push(option);
    }

    fn show(&mut self) {
        lock(&self.inner).visible = true;
    }

    fn is_visible(&self) -> bool {
        lock(&self.inner).visible
    }

    fn options(&self) -> Vec<UserOption> {
        lock(&self.inner).options.clone()
    }

    fn select(&mut self, value: &str) -> bool {
        let mut state = lock(&self.inner);
        state.selected = state.options.iter().position(|o| o.value == value);
        state.selected.is_some()
    }

    fn selected(&self) -> Option<UserOption> {
        let state = lock(&self.inner);
        state.selected.and_then(|i| state.options.get(i).cloned())
    }
}

#[derive(Debug, Default)]
struct AvatarState {
    visible: bool,
    src: Option<String>,
}

/// Avatar image. Hidden and without a source by default.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    inner: Arc<Mutex<AvatarState>>,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvatarImage for Avatar {
    fn show(&mut self) {
        lock(&self.inner).visible = true;
    }

    fn hide(&mut self) {
        lock(&self.inner).visible = false;
    }

    fn set_src(&mut self, src: &str) {
        lock(&self.inner).src = Some(src.to_string());
    }

    fn src(&self) -> Option<String> {
        lock(&self.inner).src.clone()
    }

    fn is_visible(&self) -> bool {
        lock(&self.inner).visible
    }
}
