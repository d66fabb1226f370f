// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access-control checks.
//!
//! Every check is a pure function of the actor and, where relevant, the
//! owner of the resource. Denials are returned as `CoreError::Forbidden`.

use crate::error::{CoreError, Requirement};
use talent_bridge_domain::Actor;

/// Allows only HR and managers.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for employees.
pub const fn require_staff(actor: &Actor, action: &'static str) -> Result<(), CoreError> {
    if actor.role.is_staff() {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            action,
            requirement: Requirement::StaffRole,
        })
    }
}

/// Allows only the owner of the resource, whatever their role.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the actor is not the owner.
pub const fn require_owner(
    actor: &Actor,
    owner_id: i64,
    action: &'static str,
) -> Result<(), CoreError> {
    if actor.is(owner_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            action,
            requirement: Requirement::Owner,
        })
    }
}

/// Allows the owner of the resource, or any HR or manager.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if neither condition holds.
pub const fn require_owner_or_staff(
    actor: &Actor,
    owner_id: i64,
    action: &'static str,
) -> Result<(), CoreError> {
    if actor.is(owner_id) || actor.role.is_staff() {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            action,
            requirement: Requirement::OwnerOrStaff,
        })
    }
}
