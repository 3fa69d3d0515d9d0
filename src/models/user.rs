//! User model for storage and API.

use serde::{Deserialize, Serialize};

use crate::models::{Exercise, UserId};

/// User document as persisted, with its embedded exercise list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Also used as the document ID
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    /// Append order; never reordered
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl User {
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            exercises: Vec::new(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            id: self.id.clone(),
        }
    }
}

/// Projection of a user to `{username, _id}`.
///
/// Returned by user creation and listing; exercises are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: UserId,
}
