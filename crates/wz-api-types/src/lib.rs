use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToggleStatus {
    Added,
    Removed,
    Error,
}

/// Body of `POST /add_to_wishlist/{id}/`.
///
/// The endpoint toggles membership. Older deployments answer with
/// `{added, message}`, the current view answers with `{status, message}`;
/// both are accepted and `added` wins when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistToggleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ToggleStatus>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected,
}

impl WishlistToggleResponse {
    pub fn outcome(&self) -> Option<ToggleOutcome> {
        match (self.added, self.status) {
            (Some(true), _) => Some(ToggleOutcome::Added),
            (Some(false), _) => Some(ToggleOutcome::Removed),
            (None, Some(ToggleStatus::Added)) => Some(ToggleOutcome::Added),
            (None, Some(ToggleStatus::Removed)) => Some(ToggleOutcome::Removed),
            (None, Some(ToggleStatus::Error)) => Some(ToggleOutcome::Rejected),
            (None, None) => None,
        }
    }
}

/// Body of `POST /remove_from_wishlist/{id}/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistRemoveResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
