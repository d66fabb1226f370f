// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API layer for the TalentBridge recruiting portal.
//!
//! Handlers here are transport agnostic: they take the persistence adapter,
//! the authenticated actor, and a request value, and return a response
//! value or an [`ApiError`]. The HTTP server maps both onto the wire.
//!
//! Emails are never sent from inside a handler. Handlers that notify an
//! applicant return the rendered messages in a [`HandlerOutcome`] so the
//! caller can dispatch them once the commit is done.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod notifications;
mod password_policy;
mod request_response;
mod uploads;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::accounts::{
    ADMIN_EMAIL, ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, ensure_admin, login, logout, register,
    whoami,
};
pub use handlers::applications::{
    application_detail, manage_applications, my_applications, submit_application,
    update_application_status, withdraw_application,
};
pub use handlers::interviews::{
    list_interviews, reschedule_interview, schedule_interview, update_interview,
};
pub use handlers::jobs::{
    JOBS_PER_PAGE, delete_job, edit_job, employee_dashboard, hr_dashboard, job_detail, list_jobs,
    post_job,
};
pub use handlers::notifications::{list_notifications, mark_notification_read};
pub use handlers::profile::{change_password, edit_profile, get_profile};
pub use notifications::{
    EmailMessage, LogMailer, MailError, Mailer, NotificationDispatcher, OutboxMailer,
    RecordingMailer, email_for_intent, interview_invitation_email, new_job_email,
    status_update_email,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::*;
pub use uploads::{DEFAULT_MAX_UPLOAD_BYTES, ResumeStore, ResumeUpload, UploadError};
