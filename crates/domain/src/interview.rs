// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview status, interview type, and schedule parsing.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Default interview length in minutes.
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// Longest interview that can be booked, in minutes.
pub const MAX_DURATION_MINUTES: i32 = 24 * 60;

const SCHEDULE_INPUT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

const SCHEDULE_STORAGE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const SCHEDULE_DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:long] [day], [year] at [hour repr:12]:[minute] [period]"
);

/// Lifecycle state of an interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Rescheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Rescheduled => "rescheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for InterviewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "rescheduled" => Ok(Self::Rescheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidInterviewStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the interview takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterviewType {
    #[default]
    #[serde(rename = "in-person")]
    InPerson,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "video")]
    Video,
}

impl InterviewType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InPerson => "in-person",
            Self::Phone => "phone",
            Self::Video => "video",
        }
    }

    /// Returns the label used in invitation emails.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InPerson => "In-Person",
            Self::Phone => "Phone",
            Self::Video => "Video",
        }
    }
}

impl FromStr for InterviewType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-person" => Ok(Self::InPerson),
            "phone" => Ok(Self::Phone),
            "video" => Ok(Self::Video),
            other => Err(DomainError::InvalidInterviewType(other.to_string())),
        }
    }
}

impl std::fmt::Display for InterviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a separate date (`YYYY-MM-DD`) and time (`HH:MM`, zero padded)
/// into a single timestamp.
///
/// # Errors
///
/// Returns `DomainError::InvalidScheduleDateTime` if the combined value
/// does not match `YYYY-MM-DD HH:MM`.
pub fn parse_schedule(date: &str, time: &str) -> Result<PrimitiveDateTime, DomainError> {
    let input: String = format!("{} {}", date.trim(), time.trim());
    PrimitiveDateTime::parse(&input, SCHEDULE_INPUT_FORMAT).map_err(|e| {
        DomainError::InvalidScheduleDateTime {
            input: input.clone(),
            reason: e.to_string(),
        }
    })
}

/// Formats a timestamp for storage.
#[must_use]
pub fn format_schedule_for_storage(at: PrimitiveDateTime) -> String {
    at.format(SCHEDULE_STORAGE_FORMAT)
        .unwrap_or_else(|_| at.to_string())
}

/// Parses a stored timestamp.
///
/// Accepts values with or without seconds.
///
/// # Errors
///
/// Returns `DomainError::InvalidScheduleDateTime` if the value is malformed.
pub fn parse_stored_schedule(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(value, SCHEDULE_STORAGE_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(value, SCHEDULE_INPUT_FORMAT))
        .map_err(|e| DomainError::InvalidScheduleDateTime {
            input: value.to_string(),
            reason: e.to_string(),
        })
}

/// Formats a timestamp the way invitation emails present it,
/// e.g. `June 01, 2024 at 02:30 PM`.
#[must_use]
pub fn format_schedule_for_display(at: PrimitiveDateTime) -> String {
    at.format(SCHEDULE_DISPLAY_FORMAT)
        .unwrap_or_else(|_| at.to_string())
}

/// Validates an interview duration.
///
/// # Errors
///
/// Returns `DomainError::InvalidDuration` unless the value is between
/// one minute and a full day.
pub const fn validate_duration(minutes: i32) -> Result<i32, DomainError> {
    if minutes < 1 || minutes > MAX_DURATION_MINUTES {
        return Err(DomainError::InvalidDuration(minutes));
    }
    Ok(minutes)
}
