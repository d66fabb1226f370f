// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for authenticated routes.
//!
//! Provides Axum extractors that read the bearer token and resolve it to a
//! user at the server boundary. Handlers receive the actor explicitly.

use axum::{extract::FromRequestParts, http::request::Parts};
use talent_bridge_api::{ApiError, AuthenticatedActor, AuthenticationService};
use talent_bridge_domain::User;
use tracing::{debug, warn};

use crate::{AppState, HttpError};

/// The raw bearer token of the request.
///
/// Used by logout, which needs the token itself rather than the user.
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                session_error("Missing Authorization header")
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                session_error("Invalid Authorization header")
            })?;

        let token: &str = header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            session_error("Invalid Authorization header format. Expected: 'Bearer <token>'")
        })?;

        Ok(Self(token.trim().to_string()))
    }
}

/// Extractor for the signed-in user.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionUser(actor, user): SessionUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
///     // user: User
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing or malformed, or the
/// session is unknown or expired.
pub struct SessionUser(pub AuthenticatedActor, pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let mut persistence = state.persistence.lock().await;
        let (actor, user) = AuthenticationService::validate_session(&mut persistence, &token)
            .map_err(|e| {
                warn!(error = %e, "Session validation failed");
                HttpError::from(ApiError::from(e))
            })?;

        debug!(
            username = %actor.username,
            role = %actor.role,
            "Session validated"
        );

        Ok(Self(actor, user))
    }
}

fn session_error(reason: &str) -> HttpError {
    HttpError::from(ApiError::AuthenticationFailed {
        reason: reason.to_string(),
    })
}
