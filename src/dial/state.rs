//! Activation state owned by a single [`ActionButton`](super::ActionButton).

use std::fmt;

/// Opaque token whose change asks the container to resynchronise its open flag.
///
/// Only equality matters. `Null` is a valid token and the default, so a
/// caller that never sets one never triggers a resync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ResetToken {
    #[default]
    Null,
    Int(i64),
    Text(String),
}

impl ResetToken {
    /// Token following this one, for callers that pulse a counter
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            ResetToken::Null => ResetToken::Int(1),
            ResetToken::Int(n) => ResetToken::Int(n.wrapping_add(1)),
            ResetToken::Text(s) => ResetToken::Text(format!("{s}'")),
        }
    }
}

impl From<i64> for ResetToken {
    fn from(value: i64) -> Self {
        ResetToken::Int(value)
    }
}

impl From<i32> for ResetToken {
    fn from(value: i32) -> Self {
        ResetToken::Int(i64::from(value))
    }
}

impl From<&str> for ResetToken {
    fn from(value: &str) -> Self {
        ResetToken::Text(value.to_string())
    }
}

impl From<String> for ResetToken {
    fn from(value: String) -> Self {
        ResetToken::Text(value)
    }
}

impl<T: Into<ResetToken>> From<Option<T>> for ResetToken {
    fn from(value: Option<T>) -> Self {
        value.map_or(ResetToken::Null, Into::into)
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetToken::Null => write!(f, "null"),
            ResetToken::Int(n) => write!(f, "{n}"),
            ResetToken::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Whether the owning container is still part of the UI tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// Open/closed flag plus the last reset token the container observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationState {
    is_open: bool,
    reset_token: ResetToken,
}

impl ActivationState {
    pub fn new(is_open: bool, reset_token: ResetToken) -> Self {
        Self { is_open, reset_token }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn reset_token(&self) -> &ResetToken {
        &self.reset_token
    }

    pub(crate) fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
    }

    pub(crate) fn adopt(&mut self, is_open: bool, reset_token: ResetToken) {
        self.is_open = is_open;
        self.reset_token = reset_token;
    }
}

/// What an external sync did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The token matched the last observed one
    Unchanged,
    /// Caller asked for closed while the dial was open
    ForcedClose,
    /// Caller asked for open while the dial was closed
    ForcedOpen,
    /// New token adopted, open flag already agreed with the caller
    Refreshed,
}
