// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration, login, logout, and the seeded admin account.

use talent_bridge_domain::{
    NewUser, Role, User, normalize_email, optional_text, require_text, validate_new_user,
    validate_username,
};
use talent_bridge_persistence::Persistence;
use time::Duration;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthenticationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse, UserInfo,
    WhoAmIResponse,
};

/// Username of the seeded HR account.
pub const ADMIN_USERNAME: &str = "admin";
/// Email of the seeded HR account; its presence marks the seed as done.
pub const ADMIN_EMAIL: &str = "admin@talentbridge.com";
/// Password given to the seeded HR account unless configured otherwise.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Registers an employee account.
///
/// # Errors
///
/// * `ApiError::InvalidInput` for a bad field or a password that fails policy
/// * `ApiError::Conflict` if the username or email is taken
pub fn register(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    PasswordPolicy::default().validate(&request.password, &request.confirm_password)?;

    let new_user: NewUser = NewUser {
        username: validate_username(&request.username).map_err(translate_domain_error)?,
        email: normalize_email(&request.email).map_err(translate_domain_error)?,
        role: Role::Employee,
        first_name: require_text("first_name", &request.first_name)
            .map_err(translate_domain_error)?,
        last_name: require_text("last_name", &request.last_name)
            .map_err(translate_domain_error)?,
        department: optional_text(request.department.as_deref()),
        location: optional_text(request.location.as_deref()),
        skills: optional_text(request.skills.as_deref()),
        phone: optional_text(request.phone.as_deref()),
    };
    validate_new_user(&new_user).map_err(translate_domain_error)?;

    if persistence
        .username_exists(&new_user.username)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::Conflict {
            message: String::from("Username already exists"),
        });
    }
    if persistence
        .email_exists(&new_user.email)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::Conflict {
            message: String::from("Email already registered"),
        });
    }

    let user_id: i64 = persistence
        .create_user(&new_user, &request.password)
        .map_err(translate_persistence_error)?;

    info!(user_id, username = %new_user.username, "Account registered");

    Ok(RegisterResponse {
        user_id,
        username: new_user.username,
        message: String::from("Registration successful! Please log in."),
    })
}

/// Logs in by username or email.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` for bad credentials.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
    session_lifetime: Duration,
) -> Result<LoginResponse, ApiError> {
    let (session_token, _actor, user, expires_at): (String, AuthenticatedActor, User, String) =
        AuthenticationService::login(
            persistence,
            &request.login,
            &request.password,
            session_lifetime,
        )?;

    info!(user_id = user.user_id, role = %user.role, "Logged in");

    Ok(LoginResponse {
        session_token,
        user: UserInfo::from(&user),
        expires_at,
        message: format!("Welcome back, {}!", user.first_name),
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(
    persistence: &mut Persistence,
    session_token: &str,
) -> Result<MessageResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(MessageResponse::new("You have been logged out."))
}

/// Returns the caller's account and unread notification count.
///
/// # Errors
///
/// Returns an error if the count cannot be read.
pub fn whoami(persistence: &mut Persistence, user: &User) -> Result<WhoAmIResponse, ApiError> {
    let unread_notifications: i64 = persistence
        .count_unread_notifications(user.user_id)
        .map_err(translate_persistence_error)?;
    Ok(WhoAmIResponse {
        user: UserInfo::from(user),
        unread_notifications,
    })
}

/// Creates the HR admin account unless one is already registered under
/// [`ADMIN_EMAIL`].
///
/// # Returns
///
/// The new account's id, or `None` if it already existed.
///
/// # Errors
///
/// Returns an error if the lookup or insert fails.
pub fn ensure_admin(
    persistence: &mut Persistence,
    password: &str,
) -> Result<Option<i64>, ApiError> {
    if persistence
        .email_exists(ADMIN_EMAIL)
        .map_err(translate_persistence_error)?
    {
        return Ok(None);
    }

    let admin: NewUser = NewUser {
        username: String::from(ADMIN_USERNAME),
        email: String::from(ADMIN_EMAIL),
        role: Role::Hr,
        first_name: String::from("Admin"),
        last_name: String::from("User"),
        department: Some(String::from("HR")),
        location: None,
        skills: None,
        phone: None,
    };
    let user_id: i64 = persistence
        .create_user(&admin, password)
        .map_err(translate_persistence_error)?;

    info!(user_id, "Seeded admin account");
    Ok(Some(user_id))
}
