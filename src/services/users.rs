// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User creation and lookup.

use std::sync::Arc;

use crate::clock::Clock;
use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{CreateUserForm, IdGenerator, NewUser, User, UserSummary};

/// Creates and fetches users.
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
}

impl UserService {
    pub fn new(store: UserStore, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            store,
            clock,
            ids: Arc::new(IdGenerator::new()?),
        })
    }

    /// Create a user with an empty exercise list.
    ///
    /// Usernames are not unique; nothing is persisted if validation fails.
    pub async fn create_user(&self, form: CreateUserForm) -> Result<UserSummary> {
        let new_user = NewUser::from_form(form)?;
        let user = User::new(self.ids.next_id(self.clock.now()), new_user.into_username());

        self.store.insert(&user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "Created user");

        Ok(user.summary())
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users = self.store.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Fetch a user by a caller-supplied id.
    pub async fn get_user(&self, raw_id: &str) -> Result<User> {
        let id = UserStore::check_id(raw_id)?;
        self.store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}
