// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local user store backed by a concurrent map.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::AppError;
use crate::models::{User, UserId, UserSummary};

/// In-memory user documents, shared across clones.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<UserId, User>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: &User) -> Result<(), AppError> {
        match self.users.entry(user.id.clone()) {
            Entry::Occupied(_) => Err(AppError::Database(format!(
                "User {} already exists",
                user.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    /// Returns a snapshot; later writes do not affect it.
    pub fn get_user(&self, id: &UserId) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub fn list_users(&self) -> Vec<UserSummary> {
        self.users.iter().map(|entry| entry.value().summary()).collect()
    }

    pub fn upsert_user(&self, user: &User) {
        self.users.insert(user.id.clone(), user.clone());
    }

}
