// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod interview;
mod role;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use interview::{
    DEFAULT_DURATION_MINUTES, InterviewStatus, InterviewType, MAX_DURATION_MINUTES,
    format_schedule_for_display, format_schedule_for_storage, parse_schedule,
    parse_stored_schedule, validate_duration,
};
pub use role::{Actor, Role};
pub use status::{ApplicationStatus, JobStatus};
pub use types::{
    Application, DEFAULT_JOB_TYPE, Interview, Job, JobDraft, NewApplication, NewInterview,
    NewUser, Notification, PageRequest, ProfileUpdate, User,
};
pub use validation::{
    ALLOWED_RESUME_EXTENSIONS, format_date, is_allowed_resume, normalize_email, optional_text,
    parse_optional_date, require_text, sanitize_filename, validate_job_draft, validate_new_user,
    validate_profile_update, validate_resume_filename, validate_username,
};
