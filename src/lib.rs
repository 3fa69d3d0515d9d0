// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise tracker: users and their timestamped exercise logs.
//!
//! This crate provides the backend API for creating users, appending
//! exercises to them, and querying filtered exercise logs.

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use clock::Clock;
use config::Config;
use db::UserStore;
use services::{ExerciseLogService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserService,
    pub exercise_log: ExerciseLogService,
}

impl AppState {
    /// Wire services to an explicitly constructed store and clock.
    pub fn new(config: Config, store: UserStore, clock: Arc<dyn Clock>) -> error::Result<Self> {
        Ok(Self {
            config,
            users: UserService::new(store.clone(), clock.clone())?,
            exercise_log: ExerciseLogService::new(store, clock),
        })
    }
}
