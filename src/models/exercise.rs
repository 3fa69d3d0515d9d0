// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise entries and their rendered views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;
use crate::time_utils::format_date_string;

/// Exercise entry embedded in a [`crate::models::User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Minutes
    pub duration: i64,
    /// Full timestamp; only the calendar date is ever rendered
    pub date: DateTime<Utc>,
}

impl Exercise {
    pub fn to_log_entry(&self) -> LogEntry {
        LogEntry {
            description: self.description.clone(),
            duration: self.duration,
            date: format_date_string(self.date),
        }
    }
}

/// Response to appending an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseReceipt {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    /// The id exactly as the caller sent it
    #[serde(rename = "_id")]
    pub id: String,
}

/// One rendered line of a user's log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    /// Total exercises the user has, regardless of filtering
    pub count: usize,
    pub log: Vec<LogEntry>,
}
