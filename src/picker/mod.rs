//! The user picker widget.
//!
//! Loads users from a [`UserSource`], renders them into an injected
//! [`UserSelector`], and keeps an injected [`AvatarImage`] in sync with the
//! current selection. The three UI handles are supplied by the host; the
//! picker never looks anything up globally.
//!
//! Lifecycle: `Idle → Loading → Populated`, or `Loading → Failed` when the
//! fetch errors. There is no way back and no retry; build a new picker.

pub mod widgets;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::models::UserOption;
use crate::providers::{SourceError, UserSource};

/// Errors from the picker.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("picker is already {0}")]
    AlreadyInitialized(PickerState),

    #[error("failed to load users: {0}")]
    Load(#[from] SourceError),

    #[error("no user with id {0}")]
    UnknownUser(String),
}

/// Region shown while the user list is loading.
pub trait LoadingIndicator {
    fn show(&mut self);
    fn hide(&mut self);
    /// Replace the loading display with an error message.
    fn show_error(&mut self, message: &str);
    fn is_visible(&self) -> bool;
}

/// Selection control that receives one option per user.
pub trait UserSelector {
    fn append_option(&mut self, option: UserOption);
    fn show(&mut self);
    fn is_visible(&self) -> bool;
    fn options(&self) -> Vec<UserOption>;
    /// Select the first option carrying `value`. Returns `false` and clears
    /// the selection when no option matches.
    fn select(&mut self, value: &str) -> bool;
    fn selected(&self) -> Option<UserOption>;
}

/// Image element displaying the selected user's avatar.
pub trait AvatarImage {
    fn show(&mut self);
    fn hide(&mut self);
    fn set_src(&mut self, src: &str);
    fn src(&self) -> Option<String>;
    fn is_visible(&self) -> bool;
}

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum PickerState {
    /// Constructed, `initialize` not yet called.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Options rendered; selection changes are live.
    Populated,
    /// Fetch failed; carries the message shown to the user.
    Failed(String),
}

impl fmt::Display for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerState::Idle => write!(f, "idle"),
            PickerState::Loading => write!(f, "loading"),
            PickerState::Populated => write!(f, "populated"),
            PickerState::Failed(_) => write!(f, "failed"),
        }
    }
}

/// Snapshot of what the widget currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub state: PickerState,
    pub loading_visible: bool,
    pub selector_visible: bool,
    pub options: Vec<UserOption>,
    pub selected: Option<UserOption>,
    /// Avatar source, present only while the image is visible.
    pub avatar: Option<String>,
}

/// Populates a user selector and swaps the avatar on selection change.
pub struct UserPicker<L, S, A> {
    source: Arc<dyn UserSource>,
    loading: L,
    selector: S,
    avatar: A,
    state: PickerState,
}

impl<L, S, A> UserPicker<L, S, A>
where
    L: LoadingIndicator,
    S: UserSelector,
    A: AvatarImage,
{
    pub fn new(source: Arc<dyn UserSource>, loading: L, selector: S, avatar: A) -> Self {
        Self {
            source,
            loading,
            selector,
            avatar,
            state: PickerState::Idle,
        }
    }

    /// Fetch users from `url` and render them.
    ///
    /// On success every record becomes an option, in response order, then
    /// the selector is shown and the loading indicator hidden. An empty list
    /// still counts as success. On failure the loading indicator switches to
    /// an error message and the selector stays hidden.
    ///
    /// May only be called once per picker.
    pub async fn initialize(&mut self, url: &str) -> Result<usize, PickerError> {
        if self.state != PickerState::Idle {
            tracing::warn!(state = %self.state, "ignoring repeated initialization");
            return Err(PickerError::AlreadyInitialized(self.state.clone()));
        }

        self.state = PickerState::Loading;
        self.loading.show();

        let users = match self.source.fetch_users(url).await {
            Ok(users) => users,
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(url, "loading users failed: {message}");
                self.loading.show_error(&message);
                self.state = PickerState::Failed(message);
                return Err(e.into());
            }
        };

        let count = users.len();
        for user in users {
            self.selector.append_option(UserOption::from(user));
        }
        self.selector.show();
        self.loading.hide();
        self.state = PickerState::Populated;

        tracing::debug!(url, count, "picker populated");
        Ok(count)
    }

    /// Change listener: sync the avatar with the selected option.
    ///
    /// The avatar is hidden first and only shown again when the selected
    /// option carries a non-empty avatar URL, so a previous source never
    /// stays visible.
    pub fn handle_change(&mut self) {
        self.avatar.hide();
        let selected = self.selector.selected();
        if let Some(url) = selected.as_ref().and_then(UserOption::avatar_url) {
            self.avatar.set_src(url);
            self.avatar.show();
        }
    }

    /// Select the user with `value` and fire the change listener.
    ///
    /// The listener runs even for unknown values, which leaves the avatar
    /// hidden.
    pub fn select(&mut self, value: &str) -> Result<UserOption, PickerError> {
        let found = self.selector.select(value);
        self.handle_change();
        if !found {
            return Err(PickerError::UnknownUser(value.to_string()));
        }
        self.selector
            .selected()
            .ok_or_else(|| PickerError::UnknownUser(value.to_string()))
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Capture the current display.
    pub fn view(&self) -> PickerView {
        PickerView {
            state: self.state.clone(),
            loading_visible: self.loading.is_visible(),
            selector_visible: self.selector.is_visible(),
            options: self.selector.options(),
            selected: self.selector.selected(),
            avatar: self
                .avatar
                .is_visible()
                .then(|| self.avatar.src())
                .flatten(),
        }
    }
}
