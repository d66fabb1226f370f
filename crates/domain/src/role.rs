// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account roles and the acting identity passed to every operation.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role attached to a user account.
///
/// Employees browse and apply to jobs. HR and managers post jobs,
/// review applications, and schedule interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Hr,
    Manager,
}

impl Role {
    /// Returns the string representation used for persistence and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Hr => "hr",
            Self::Manager => "manager",
        }
    }

    /// Returns true for roles that manage postings, applications, and interviews.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        matches!(self, Self::Hr | Self::Manager)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Self::Employee),
            "hr" => Ok(Self::Hr),
            "manager" => Ok(Self::Manager),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity performing an operation.
///
/// There is no ambient current user anywhere in the system; callers
/// resolve the actor from the session and hand it down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub role: Role,
}

impl Actor {
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns true if this actor is the given user.
    #[must_use]
    pub const fn is(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
