// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod exercise;
pub mod id;
pub mod input;
pub mod user;

pub use exercise::{Exercise, ExerciseLog, ExerciseReceipt, LogEntry};
pub use id::{IdGenerator, UserId};
pub use input::{
    CreateUserForm, DateInput, DurationInput, ExerciseForm, LogFilter, LogParams, NewExercise, NewUser,
};
pub use user::{User, UserSummary};
