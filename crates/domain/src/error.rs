// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role tag is not one of the known roles.
    InvalidRole(String),
    /// Application status tag is not one of the known statuses.
    InvalidApplicationStatus(String),
    /// Interview status tag is not one of the known statuses.
    InvalidInterviewStatus(String),
    /// Interview type tag is not one of the known types.
    InvalidInterviewType(String),
    /// Job status tag is not one of the known statuses.
    InvalidJobStatus(String),
    /// Interview date and time could not be parsed.
    InvalidScheduleDateTime {
        /// The raw input, date and time joined by a space.
        input: String,
        /// Parser error description.
        reason: String,
    },
    /// A calendar date could not be parsed.
    InvalidDate {
        /// The field that carried the date.
        field: &'static str,
        /// The raw input.
        input: String,
    },
    /// Interview duration is outside the accepted range.
    InvalidDuration(i32),
    /// Uploaded file has no usable name.
    MissingFileName,
    /// Uploaded file extension is not allowed.
    DisallowedFileType {
        /// The original file name.
        filename: String,
    },
    /// A required field is empty.
    MissingField(&'static str),
    /// A field value is malformed.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Email address is malformed.
    InvalidEmail(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidApplicationStatus(status) => {
                write!(f, "Invalid application status: {status}")
            }
            Self::InvalidInterviewStatus(status) => {
                write!(f, "Invalid interview status: {status}")
            }
            Self::InvalidInterviewType(kind) => write!(f, "Invalid interview type: {kind}"),
            Self::InvalidJobStatus(status) => write!(f, "Invalid job status: {status}"),
            Self::InvalidScheduleDateTime { input, reason } => write!(
                f,
                "Invalid interview date/time '{input}' (expected YYYY-MM-DD HH:MM): {reason}"
            ),
            Self::InvalidDate { field, input } => {
                write!(f, "Invalid {field} '{input}' (expected YYYY-MM-DD)")
            }
            Self::InvalidDuration(minutes) => {
                write!(f, "Invalid interview duration: {minutes} minutes")
            }
            Self::MissingFileName => write!(f, "Uploaded file has no name"),
            Self::DisallowedFileType { filename } => write!(
                f,
                "File type not allowed for '{filename}'. Please upload PDF, DOC, or DOCX files only."
            ),
            Self::MissingField(field) => write!(f, "Field '{field}' is required"),
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {email}"),
        }
    }
}

impl std::error::Error for DomainError {}
