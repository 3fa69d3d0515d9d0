// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request payloads and their validated forms.
//!
//! Raw `*Form`/`*Params` structs mirror what clients send and are loosely
//! typed. Each has a validated counterpart that can only be constructed from
//! input that satisfies the operation's rules.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::time_utils::parse_date_input;

/// Largest integer a client can send as a JSON number without precision loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Run the derived validations, reporting `field` as missing on failure.
fn require_field<T: Validate>(form: &T, field: &'static str) -> Result<()> {
    form.validate().map_err(|errors| {
        tracing::debug!(%errors, field, "Form validation failed");
        AppError::MissingField(field)
    })
}

/// A text field that may arrive with some other JSON type.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Other(IgnoredAny),
}

/// Decode a text field, treating values of any other type as absent so
/// they fail validation instead of failing body decoding.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientText>::deserialize(deserializer)? {
        Some(LenientText::Text(text)) => Some(text),
        Some(LenientText::Other(_)) | None => None,
    })
}

/// Treat empty and whitespace-only strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ─── Users ───────────────────────────────────────────────────

/// Body of `POST /api/users`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserForm {
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
}

/// A username that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
}

impl NewUser {
    pub fn from_form(form: CreateUserForm) -> Result<Self> {
        require_field(&form, "username")?;
        let username = form.username.ok_or(AppError::MissingField("username"))?;
        Ok(Self { username })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn into_username(self) -> String {
        self.username
    }
}

// ─── Exercises ───────────────────────────────────────────────

/// Duration as sent by a client: a JSON number or text from a form.
///
/// Any other JSON value decodes as `Other` and is rejected during validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl DurationInput {
    /// Coerce to a number, then require it to be a whole number of minutes.
    ///
    /// `"30"` and `"30.0"` both yield 30; `"30.5"` and `"abc"` yield `None`.
    pub fn to_minutes(&self) -> Option<i64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
            Self::Other(_) => return None,
        };

        let integral =
            value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER;
        integral.then_some(value as i64)
    }
}

/// Date as sent by a client: text, or epoch milliseconds as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Millis(f64),
    Text(String),
    Other(IgnoredAny),
}

impl DateInput {
    /// `Ok(None)` for blank text, meaning "use the current date".
    fn resolve(self) -> Result<Option<DateTime<Utc>>> {
        let invalid = AppError::InvalidDate("date");
        match self {
            Self::Millis(millis) if millis.is_finite() => {
                DateTime::from_timestamp_millis(millis.trunc() as i64)
                    .map(Some)
                    .ok_or(invalid)
            }
            Self::Text(text) => non_blank(Some(text))
                .map(|raw| parse_date_input(&raw).ok_or(invalid))
                .transpose(),
            Self::Millis(_) | Self::Other(_) => Err(invalid),
        }
    }
}

/// Body of `POST /api/users/{_id}/exercises`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ExerciseForm {
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub duration: Option<DurationInput>,
    pub date: Option<DateInput>,
}

/// An exercise that passed validation, not yet attached to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    /// `None` means "use the current date"
    pub date: Option<DateTime<Utc>>,
}

impl NewExercise {
    /// Validate description, then duration, then date; first failure wins.
    pub fn from_form(form: ExerciseForm) -> Result<Self> {
        require_field(&form, "description")?;
        let description = form
            .description
            .ok_or(AppError::MissingField("description"))?;

        let duration = form
            .duration
            .as_ref()
            .and_then(DurationInput::to_minutes)
            .ok_or(AppError::InvalidDuration)?;

        let date = match form.date {
            Some(input) => input.resolve()?,
            None => None,
        };

        Ok(Self {
            description,
            duration,
            date,
        })
    }
}

// ─── Log Queries ─────────────────────────────────────────────

/// Query string of `GET /api/users/{_id}/logs`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Parsed log query: an inclusive date range and a head limit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Bounds that fail to parse are rejected; a limit that is not a
    /// non-negative integer is ignored.
    pub fn from_params(params: LogParams) -> Result<Self> {
        let from = parse_bound(params.from, "from")?;
        let to = parse_bound(params.to, "to")?;
        let limit = non_blank(params.limit).and_then(|raw| raw.trim().parse::<usize>().ok());

        Ok(Self { from, to, limit })
    }

    /// Whether `date` lies within `[from, to]`, comparing full timestamps.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn parse_bound(raw: Option<String>, name: &'static str) -> Result<Option<DateTime<Utc>>> {
    non_blank(raw)
        .map(|raw| parse_date_input(&raw).ok_or(AppError::InvalidDate(name)))
        .transpose()
}
