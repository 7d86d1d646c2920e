//! Session models

use serde::{Deserialize, Serialize};

use super::Id;

/// Cached identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: Option<Id>,
    pub username: String,
}

/// In-memory session state.
///
/// Holding a non-empty token is what makes the client authenticated.
/// Nothing checks whether the server still accepts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserData>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
