// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercise_log;
pub mod users;

pub use exercise_log::ExerciseLogService;
pub use users::UserService;
