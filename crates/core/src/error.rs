// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::{ApplicationStatus, DomainError};

/// What an actor must satisfy to perform an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The HR or manager role.
    StaffRole,
    /// Ownership of the resource.
    Owner,
    /// Ownership of the resource, or the HR or manager role.
    OwnerOrStaff,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaffRole => write!(f, "HR or manager role"),
            Self::Owner => write!(f, "ownership"),
            Self::OwnerOrStaff => write!(f, "ownership or HR/manager role"),
        }
    }
}

/// Errors that can occur during workflow transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The actor is not permitted to perform the action.
    Forbidden {
        /// The attempted action.
        action: &'static str,
        /// What the actor lacked.
        requirement: Requirement,
    },
    /// The operation would duplicate an existing record.
    Conflict(String),
    /// The record is in a status that does not allow the action.
    InvalidState {
        /// The attempted action.
        action: &'static str,
        /// The current status.
        status: ApplicationStatus,
    },
    /// The caller did not load a record the command needs.
    Internal(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Forbidden {
                action,
                requirement,
            } => write!(f, "Not permitted to {action}: requires {requirement}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::InvalidState { action, status } => write!(
                f,
                "Cannot {action} an application with status '{status}'"
            ),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
