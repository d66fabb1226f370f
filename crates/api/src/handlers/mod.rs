// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Every handler takes the persistence adapter and, where the operation is
//! authenticated, the actor resolved from the session. Records are loaded
//! by explicit id lookups, handed to the workflow, and the resulting
//! transition is committed in one transaction. Emails are returned to the
//! caller for dispatch after the commit.

pub mod accounts;
pub mod applications;
pub mod interviews;
pub mod jobs;
pub mod notifications;
pub mod profile;

use std::str::FromStr;
use talent_bridge::{Command, TransitionResult, WorkflowContext, apply};
use talent_bridge_domain::{Application, DomainError, Interview, Job, PageRequest, User};
use talent_bridge_persistence::{PersistTransitionResult, Persistence};
use tracing::{debug, error, warn};

use crate::auth::AuthenticatedActor;
use crate::error::{
    ApiError, not_found, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::notifications::{EmailMessage, email_for_intent};

fn load_job(persistence: &mut Persistence, job_id: i64) -> Result<Job, ApiError> {
    persistence
        .get_job(job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Job", job_id))
}

fn load_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<Application, ApiError> {
    persistence
        .get_application(application_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Application", application_id))
}

fn load_interview(persistence: &mut Persistence, interview_id: i64) -> Result<Interview, ApiError> {
    persistence
        .get_interview(interview_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Interview", interview_id))
}

fn load_user(persistence: &mut Persistence, user_id: i64) -> Result<User, ApiError> {
    persistence
        .get_user(user_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("User", user_id))
}

/// Parses a lowercase tag, treating blank input as absent.
fn parse_optional_tag<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(translate_domain_error),
    }
}

fn page_request(page: Option<u32>, per_page: u32) -> PageRequest {
    PageRequest::new(page.unwrap_or(1), per_page)
}

/// Runs a workflow command, logging denials.
fn run_command(
    context: &WorkflowContext,
    command: Command,
    actor: &AuthenticatedActor,
) -> Result<TransitionResult, ApiError> {
    let name: &'static str = command.name();
    apply(context, command, &actor.actor()).map_err(|e| {
        warn!(
            command = name,
            user_id = actor.user_id,
            error = %e,
            "Command rejected"
        );
        translate_core_error(e)
    })
}

/// Looks up the applicant's address for a notification. A missing user
/// means no email rather than a failed request.
fn recipient_email(persistence: &mut Persistence, user_id: i64) -> Option<String> {
    match persistence.get_user(user_id) {
        Ok(Some(user)) => Some(user.email),
        Ok(None) => {
            debug!(user_id, "Notification recipient no longer exists");
            None
        }
        Err(e) => {
            warn!(user_id, error = %e, "Failed to look up notification recipient");
            None
        }
    }
}

/// Commits a transition and its in-app notification.
fn commit(
    persistence: &mut Persistence,
    result: &TransitionResult,
) -> Result<PersistTransitionResult, ApiError> {
    persistence.persist_transition(result).map_err(|e| {
        error!(error = %e, "Failed to commit transition");
        translate_persistence_error(e)
    })
}

/// Renders the email for a committed transition, if it notifies anyone.
fn emails_for(persistence: &mut Persistence, result: &TransitionResult) -> Vec<EmailMessage> {
    result
        .notification
        .as_ref()
        .and_then(|intent| {
            recipient_email(persistence, intent.recipient_user_id())
                .map(|to| email_for_intent(intent, &to))
        })
        .into_iter()
        .collect()
}
