// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use talent_bridge::{CoreError, policy};
use talent_bridge_domain::{Actor, Application, Job, Notification, Role, User};
use talent_bridge_persistence::{
    Persistence, PersistenceError, SessionData, UserCredentials, verify_password,
};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::error::AuthError;

/// An authenticated user with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The user's id.
    pub user_id: i64,
    /// The user's login name.
    pub username: String,
    /// The role assigned to this user.
    pub role: Role,
}

impl AuthenticatedActor {
    #[must_use]
    pub const fn new(user_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }

    /// Builds the actor from a stored user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self::new(user.user_id, user.username.clone(), user.role)
    }

    /// The identity the workflow checks permissions against.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}

fn denied(err: CoreError) -> AuthError {
    match err {
        CoreError::Forbidden {
            action,
            requirement,
        } => {
            warn!(action, requirement = %requirement, "Access denied");
            AuthError::Unauthorized {
                action: action.to_string(),
                requirement: requirement.to_string(),
            }
        }
        other => AuthError::Unauthorized {
            action: String::from("unknown"),
            requirement: other.to_string(),
        },
    }
}

/// Authorization service for the operations that do not pass through the
/// application workflow.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Only HR and managers may post jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an employee.
    pub fn authorize_post_job(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        policy::require_staff(&actor.actor(), "post a job").map_err(denied)
    }

    /// HR, managers and the poster may edit or delete a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor neither posted the job nor holds a
    /// staff role.
    pub fn authorize_manage_job(
        actor: &AuthenticatedActor,
        job: &Job,
        action: &'static str,
    ) -> Result<(), AuthError> {
        policy::require_owner_or_staff(&actor.actor(), job.posted_by, action).map_err(denied)
    }

    /// Only HR and managers see the review lists and dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is an employee.
    pub fn authorize_review(
        actor: &AuthenticatedActor,
        action: &'static str,
    ) -> Result<(), AuthError> {
        policy::require_staff(&actor.actor(), action).map_err(denied)
    }

    /// The applicant, HR and managers may view an application.
    ///
    /// # Errors
    ///
    /// Returns an error for any other employee.
    pub fn authorize_view_application(
        actor: &AuthenticatedActor,
        application: &Application,
    ) -> Result<(), AuthError> {
        policy::require_owner_or_staff(&actor.actor(), application.user_id, "view application")
            .map_err(denied)
    }

    /// Only the recipient may mark a notification read.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not the recipient.
    pub fn authorize_read_notification(
        actor: &AuthenticatedActor,
        notification: &Notification,
    ) -> Result<(), AuthError> {
        policy::require_owner(&actor.actor(), notification.user_id, "mark notification read")
            .map_err(denied)
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session lifetime (30 days).
    pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::days(30);

    /// Verifies credentials and creates a session.
    ///
    /// `login` may be either the username or the email address.
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `user`, `expires_at`)
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong or the session cannot
    /// be stored. Unknown users and wrong passwords produce the same message.
    pub fn login(
        persistence: &mut Persistence,
        login: &str,
        password: &str,
        session_lifetime: Duration,
    ) -> Result<(String, AuthenticatedActor, User, String), AuthError> {
        let invalid = || AuthError::AuthenticationFailed {
            reason: String::from("Invalid username or password"),
        };

        let credentials: UserCredentials = persistence
            .get_user_by_login(login.trim())
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                debug!(login = %login, "Login for unknown user");
                invalid()
            })?;

        let matches: bool = verify_password(password, &credentials.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !matches {
            warn!(user_id = credentials.user.user_id, "Login with wrong password");
            return Err(invalid());
        }

        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + session_lifetime;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, credentials.user.user_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        let actor: AuthenticatedActor = AuthenticatedActor::from_user(&credentials.user);
        Ok((session_token, actor, credentials.user, expires_at_str))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or its user
    /// no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, User), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: User = persistence
            .get_user(session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok((AuthenticatedActor::from_user(&user), user))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Generates an opaque 256-bit session token.
    fn generate_session_token() -> String {
        format!(
            "{:032x}{:032x}",
            rand::random::<u128>(),
            rand::random::<u128>()
        )
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
