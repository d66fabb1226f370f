// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The caller's own profile, resume, and password.

use talent_bridge_domain::{
    ProfileUpdate, User, optional_text, require_text, validate_profile_update,
};
use talent_bridge_persistence::{Persistence, UserCredentials, verify_password};
use tracing::{error, info};

use super::load_user;
use crate::auth::AuthenticatedActor;
use crate::error::{ApiError, not_found, translate_domain_error, translate_persistence_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ChangePasswordRequest, EditProfileRequest, MessageResponse, ProfileResponse, UserInfo,
};
use crate::uploads::{ResumeStore, ResumeUpload};

/// Returns the caller's profile.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the account no longer exists.
pub fn get_profile(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ProfileResponse, ApiError> {
    let user: User = load_user(persistence, actor.user_id)?;
    Ok(ProfileResponse {
        user: UserInfo::from(&user),
    })
}

/// Overwrites the caller's profile fields and optionally replaces the
/// resume on file.
///
/// A new resume is written to the store first, so a failed write leaves the
/// profile untouched. The fields and the new name are then committed
/// together. The previous file is removed only after that commit; if the
/// commit fails the new file is removed instead.
///
/// # Errors
///
/// * `ApiError::InvalidInput` for a blank name or a disallowed resume
/// * `ApiError::StoreFailure` if an update fails
pub fn edit_profile(
    persistence: &mut Persistence,
    store: &ResumeStore,
    actor: &AuthenticatedActor,
    request: &EditProfileRequest,
    resume: Option<&ResumeUpload>,
) -> Result<ProfileResponse, ApiError> {
    let update: ProfileUpdate = ProfileUpdate {
        first_name: require_text("first_name", &request.first_name)
            .map_err(translate_domain_error)?,
        last_name: require_text("last_name", &request.last_name)
            .map_err(translate_domain_error)?,
        department: optional_text(request.department.as_deref()),
        location: optional_text(request.location.as_deref()),
        phone: optional_text(request.phone.as_deref()),
        skills: optional_text(request.skills.as_deref()),
    };
    validate_profile_update(&update).map_err(translate_domain_error)?;

    let previous: User = load_user(persistence, actor.user_id)?;
    let stored: Option<String> = resume.map(|upload| store.save(upload)).transpose()?;

    if let Err(e) = persistence.update_profile(actor.user_id, &update, stored.as_deref()) {
        if let Some(name) = stored.as_deref() {
            error!(user_id = actor.user_id, error = %e, "Failed to record resume");
            store.discard(name);
        }
        return Err(translate_persistence_error(e));
    }

    if let Some(name) = stored.as_deref() {
        if let Some(old) = previous.resume_filename.as_deref() {
            store.discard(old);
        }
        info!(user_id = actor.user_id, stored = %name, "Resume replaced");
    }

    get_profile(persistence, actor)
}

/// Changes the caller's password after checking the current one.
///
/// # Errors
///
/// * `ApiError::InvalidInput` if the current password is wrong or the new
///   one fails policy
/// * `ApiError::StoreFailure` if the update fails
pub fn change_password(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    let credentials: UserCredentials = persistence
        .get_user_credentials(actor.user_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("User", actor.user_id))?;

    let matches: bool = verify_password(&request.current_password, &credentials.password_hash)
        .map_err(translate_persistence_error)?;
    if !matches {
        return Err(ApiError::InvalidInput {
            field: String::from("current_password"),
            message: String::from("Current password is incorrect."),
        });
    }

    PasswordPolicy::default().validate(&request.new_password, &request.confirm_password)?;

    persistence
        .update_password(actor.user_id, &request.new_password)
        .map_err(translate_persistence_error)?;

    info!(user_id = actor.user_id, "Password changed");
    Ok(MessageResponse::new("Password changed successfully!"))
}
