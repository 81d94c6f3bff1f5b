//! User records as delivered by the users endpoint, and the options
//! rendered from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque user identifier. The endpoint may send it as a JSON number
/// (integer of any width, or float) or a JSON string; both are kept
/// verbatim and render as their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Number(n.into())
    }
}

impl From<i32> for UserId {
    fn from(n: i32) -> Self {
        UserId::Number(n.into())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// One item of the users endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    /// Avatar URL; `null` and a missing key both decode to `None`.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserRecord {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>, avatar: Option<&str>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            avatar: avatar.map(str::to_string),
        }
    }
}

/// A rendered selector entry: visible label, submitted value, and the
/// hidden avatar association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOption {
    pub value: String,
    pub label: String,
    pub avatar: Option<String>,
}

impl UserOption {
    /// The associated avatar, if it is a non-empty string.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.is_empty())
    }
}

impl From<UserRecord> for UserOption {
    fn from(record: UserRecord) -> Self {
        Self {
            value: record.user_id.to_string(),
            label: record.name,
            avatar: record.avatar,
        }
    }
}
