// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log service.
//!
//! Appends validated exercises to a user's embedded list and builds
//! filtered, rendered views of that list. Appends are a plain
//! read-modify-write of the whole user document.

use std::sync::Arc;

use crate::clock::Clock;
use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{
    Exercise, ExerciseForm, ExerciseLog, ExerciseReceipt, LogEntry, LogFilter, LogParams,
    NewExercise, User, UserId,
};
use crate::time_utils::format_date_string;

/// Appends to and queries users' exercise logs.
#[derive(Clone)]
pub struct ExerciseLogService {
    store: UserStore,
    clock: Arc<dyn Clock>,
}

impl ExerciseLogService {
    pub fn new(store: UserStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and append an exercise to a user.
    ///
    /// Checks run in order (id, description, duration, date) and stop at
    /// the first failure, before the store is touched.
    pub async fn append_exercise(
        &self,
        raw_id: &str,
        form: ExerciseForm,
    ) -> Result<ExerciseReceipt> {
        let id = UserStore::check_id(raw_id)?;
        let new_exercise = NewExercise::from_form(form)?;

        let mut user = self.load_user(&id).await?;

        let exercise = Exercise {
            description: new_exercise.description,
            duration: new_exercise.duration,
            date: new_exercise.date.unwrap_or_else(|| self.clock.now()),
        };
        user.exercises.push(exercise.clone());
        self.store.save(&user).await?;

        tracing::info!(
            user_id = %id,
            duration = exercise.duration,
            total = user.exercises.len(),
            "Appended exercise"
        );

        Ok(ExerciseReceipt {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_date_string(exercise.date),
            id: raw_id.to_string(),
        })
    }

    /// Build a user's log, filtered by date range and head-limited.
    ///
    /// `count` is always the user's total number of exercises.
    pub async fn get_log(&self, raw_id: &str, params: LogParams) -> Result<ExerciseLog> {
        let id = UserStore::check_id(raw_id)?;
        let filter = LogFilter::from_params(params)?;

        let user = self.load_user(&id).await?;
        if user.exercises.is_empty() {
            return Err(AppError::NoExercises);
        }

        let log = render_log(&user.exercises, &filter);
        tracing::debug!(
            user_id = %id,
            total = user.exercises.len(),
            returned = log.len(),
            "Built exercise log"
        );

        Ok(ExerciseLog {
            id: user.id,
            username: user.username,
            count: user.exercises.len(),
            log,
        })
    }

    async fn load_user(&self, id: &UserId) -> Result<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

/// Keep exercises inside the filter's range, in append order, then take
/// the first `limit` of them.
pub fn render_log(exercises: &[Exercise], filter: &LogFilter) -> Vec<LogEntry> {
    let matching = exercises.iter().filter(|e| filter.contains(e.date));
    match filter.limit {
        Some(limit) => matching.take(limit).map(Exercise::to_log_entry).collect(),
        None => matching.map(Exercise::to_log_entry).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::models::{CreateUserForm, DateInput, DurationInput};
    use crate::services::UserService;
    use chrono::{TimeZone, Utc};

    struct Fixture {
        store: UserStore,
        users: UserService,
        log: ExerciseLogService,
    }

    fn fixture() -> Fixture {
        let store = UserStore::in_memory();
        let clock: Arc<dyn Clock> = Arc::new(MockClock::with_time(
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        ));
        Fixture {
            users: UserService::new(store.clone(), clock.clone()).unwrap(),
            log: ExerciseLogService::new(store.clone(), clock),
            store,
        }
    }

    async fn create_user(f: &Fixture, name: &str) -> UserId {
        f.users
            .create_user(CreateUserForm {
                username: Some(name.to_string()),
            })
            .await
            .unwrap()
            .id
    }

    fn exercise_form(description: &str, duration: &str, date: Option<&str>) -> ExerciseForm {
        ExerciseForm {
            description: Some(description.to_string()),
            duration: Some(DurationInput::Text(duration.to_string())),
            date: date.map(|d| DateInput::Text(d.to_string())),
        }
    }

    fn exercise(day: u32) -> Exercise {
        Exercise {
            description: format!("day {day}"),
            duration: i64::from(day),
            date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_append_defaults_date_to_now() {
        let f = fixture();
        let id = create_user(&f, "alice").await;

        let receipt = f
            .log
            .append_exercise(id.as_str(), exercise_form("run", "30", None))
            .await
            .unwrap();

        assert_eq!(receipt.username, "alice");
        assert_eq!(receipt.duration, 30);
        assert_eq!(receipt.date, "Mon Jan 15 2024");
        assert_eq!(receipt.id, id.as_str());
    }

    #[tokio::test]
    async fn test_append_unknown_user_is_not_found() {
        let f = fixture();
        let err = f
            .log
            .append_exercise("65a4f2b1c3d4e5f601234567", exercise_form("run", "30", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "unknown userId");
    }

    #[tokio::test]
    async fn test_rejected_append_leaves_store_untouched() {
        let f = fixture();
        let id = create_user(&f, "alice").await;

        let err = f
            .log
            .append_exercise(id.as_str(), exercise_form("run", "30.5", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration));

        let user = f.store.find_by_id(&id).await.unwrap().unwrap();
        assert!(user.exercises.is_empty());
    }

    #[tokio::test]
    async fn test_get_log_requires_exercises() {
        let f = fixture();
        let id = create_user(&f, "alice").await;

        let err = f
            .log
            .get_log(id.as_str(), LogParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoExercises));
    }

    #[tokio::test]
    async fn test_get_log_count_is_total() {
        let f = fixture();
        let id = create_user(&f, "alice").await;
        for day in 1..=5 {
            let date = format!("2024-01-0{day}");
            f.log
                .append_exercise(id.as_str(), exercise_form("run", "10", Some(&date)))
                .await
                .unwrap();
        }

        let log = f
            .log
            .get_log(
                id.as_str(),
                LogParams {
                    from: Some("2024-01-04".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(log.count, 5);
        assert_eq!(log.log.len(), 2);
        assert_eq!(log.log[0].date, "Thu Jan 04 2024");
    }

    #[test]
    fn test_render_log_preserves_append_order() {
        let exercises = vec![exercise(3), exercise(1), exercise(5), exercise(2), exercise(4)];
        let filter = LogFilter {
            from: Some(exercise(2).date),
            to: Some(exercise(4).date),
            limit: None,
        };

        let log = render_log(&exercises, &filter);
        let descriptions: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["day 3", "day 2", "day 4"]);
    }

    #[test]
    fn test_render_log_limit_is_head_slice() {
        let exercises: Vec<_> = (1..=4).map(exercise).collect();

        let two = render_log(
            &exercises,
            &LogFilter {
                limit: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(two, vec![exercise(1).to_log_entry(), exercise(2).to_log_entry()]);

        let none = render_log(
            &exercises,
            &LogFilter {
                limit: Some(0),
                ..Default::default()
            },
        );
        assert!(none.is_empty());

        let all = render_log(
            &exercises,
            &LogFilter {
                limit: Some(10),
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 4);
    }
}
