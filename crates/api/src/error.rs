// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use crate::uploads::UploadError;
use talent_bridge::CoreError;
use talent_bridge_domain::DomainError;
use talent_bridge_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor lacks the role or ownership the action needs.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// What the actor lacked.
        requirement: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                requirement,
            } => {
                write!(f, "Not permitted to {action}: requires {requirement}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and represent
/// the API contract. The server maps each variant to one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, invalid or expired session, or bad credentials.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor does not have permission.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// What the actor lacked.
        requirement: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request would duplicate an existing record.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The record's current status does not allow the action.
    InvalidState {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A store write failed and was rolled back.
    StoreFailure {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden {
                action,
                requirement,
            } => {
                write!(f, "Not permitted to {action}: requires {requirement}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict { message } | Self::InvalidState { message } => {
                write!(f, "{message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::StoreFailure { message } => write!(f, "Store failure: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                requirement,
            } => Self::Forbidden {
                action,
                requirement,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::InvalidInput {
            field: String::from("password"),
            message: err.to_string(),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Io(_) => Self::Internal {
                message: err.to_string(),
            },
            UploadError::Rejected(_) | UploadError::TooLarge { .. } => Self::InvalidInput {
                field: String::from("resume"),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: String = match &err {
        DomainError::InvalidRole(_) => String::from("role"),
        DomainError::InvalidApplicationStatus(_)
        | DomainError::InvalidInterviewStatus(_)
        | DomainError::InvalidJobStatus(_) => String::from("status"),
        DomainError::InvalidInterviewType(_) => String::from("interview_type"),
        DomainError::InvalidScheduleDateTime { .. } => String::from("scheduled_date"),
        DomainError::InvalidDate { field, .. } | DomainError::MissingField(field) => {
            (*field).to_string()
        }
        DomainError::InvalidField { field, .. } => (*field).to_string(),
        DomainError::InvalidDuration(_) => String::from("duration"),
        DomainError::MissingFileName | DomainError::DisallowedFileType { .. } => {
            String::from("resume")
        }
        DomainError::InvalidEmail(_) => String::from("email"),
    };
    ApiError::InvalidInput {
        field,
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Forbidden {
            action,
            requirement,
        } => ApiError::Forbidden {
            action: action.to_string(),
            requirement: requirement.to_string(),
        },
        CoreError::Conflict(message) => ApiError::Conflict { message },
        err @ CoreError::InvalidState { .. } => ApiError::InvalidState {
            message: err.to_string(),
        },
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

/// Translates a persistence error into an API error.
///
/// Unique violations surface as conflicts; anything else that reached the
/// store is a failed, rolled-back write.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(msg) => ApiError::Conflict { message: msg },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::StoreFailure {
            message: other.to_string(),
        },
    }
}

/// Builds a not-found error for a record type and id.
#[must_use]
pub fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} with ID {id} does not exist"),
    }
}
