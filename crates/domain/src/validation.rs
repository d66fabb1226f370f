// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{JobDraft, NewUser, ProfileUpdate};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// File extensions accepted for resume uploads, lowercase.
pub const ALLOWED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Returns true if the file name carries an allowed resume extension.
///
/// The comparison is case-insensitive, so `resume.PDF` is accepted.
#[must_use]
pub fn is_allowed_resume(filename: &str) -> bool {
    filename.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_RESUME_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// Validates the original name of an uploaded resume.
///
/// # Errors
///
/// Returns `DomainError::MissingFileName` for an empty name and
/// `DomainError::DisallowedFileType` for any extension other than
/// pdf, doc, or docx.
pub fn validate_resume_filename(filename: &str) -> Result<(), DomainError> {
    if filename.trim().is_empty() {
        return Err(DomainError::MissingFileName);
    }
    if !is_allowed_resume(filename) {
        return Err(DomainError::DisallowedFileType {
            filename: filename.to_string(),
        });
    }
    Ok(())
}

/// Reduces an uploaded file name to a safe single path component.
///
/// Directory parts are dropped, whitespace becomes `_`, and anything
/// outside ASCII letters, digits, `.`, `-`, and `_` is removed. Leading
/// and trailing dots and underscores are trimmed. Returns `None` when
/// nothing usable remains.
#[must_use]
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base: &str = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let trimmed: &str = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims a required text field.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is blank.
pub fn require_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, mapping blank input to `None`.
#[must_use]
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Validates and normalizes an email address to lowercase.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address lacks a local part,
/// a dotted domain, or contains whitespace.
pub fn normalize_email(email: &str) -> Result<String, DomainError> {
    let trimmed: &str = email.trim();
    let invalid = || DomainError::InvalidEmail(trimmed.to_string());
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(trimmed.to_lowercase())
}

/// Validates a username.
///
/// # Errors
///
/// Returns an error if the username is blank, longer than 80 characters,
/// or contains characters other than ASCII letters, digits, `.`, `-`, `_`.
pub fn validate_username(username: &str) -> Result<String, DomainError> {
    let trimmed: String = require_text("username", username)?;
    if trimmed.len() > 80 {
        return Err(DomainError::InvalidField {
            field: "username",
            reason: String::from("must be at most 80 characters"),
        });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(DomainError::InvalidField {
            field: "username",
            reason: String::from("may only contain letters, digits, '.', '-' and '_'"),
        });
    }
    Ok(trimmed)
}

/// Parses an optional `YYYY-MM-DD` date; blank input yields `None`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is present but malformed.
pub fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Date>, DomainError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => Date::parse(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| DomainError::InvalidDate {
                field,
                input: raw.to_string(),
            }),
    }
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Validates the fields of a new account.
///
/// # Errors
///
/// Returns the first field that fails validation.
pub fn validate_new_user(user: &NewUser) -> Result<(), DomainError> {
    validate_username(&user.username)?;
    normalize_email(&user.email)?;
    require_text("first_name", &user.first_name)?;
    require_text("last_name", &user.last_name)?;
    Ok(())
}

/// Validates profile edits.
///
/// # Errors
///
/// Returns an error if either name is blank.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), DomainError> {
    require_text("first_name", &update.first_name)?;
    require_text("last_name", &update.last_name)?;
    Ok(())
}

/// Validates a job posting.
///
/// # Errors
///
/// Returns an error if title, department, location, description, or
/// job type is blank.
pub fn validate_job_draft(draft: &JobDraft) -> Result<(), DomainError> {
    require_text("title", &draft.title)?;
    require_text("department", &draft.department)?;
    require_text("location", &draft.location)?;
    require_text("description", &draft.description)?;
    require_text("job_type", &draft.job_type)?;
    Ok(())
}
