// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Email notifications.
//!
//! Messages are rendered from fixed HTML templates and handed to a
//! [`Mailer`]. Delivery is best-effort: [`NotificationDispatcher`] logs a
//! failed send and moves on, so a mail outage never undoes or blocks the
//! state change that triggered it.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use talent_bridge::NotificationIntent;
use talent_bridge_domain::{ApplicationStatus, InterviewType, format_schedule_for_display};
use thiserror::Error;
use time::PrimitiveDateTime;
use tracing::{debug, info, warn};

/// A rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Errors raised by a mail transport.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Failed to write message: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mail transport unavailable: {0}")]
    Unavailable(String),
}

/// Outbound mail transport.
pub trait Mailer: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be handed off.
    fn send(&self, sender: Option<&str>, message: &EmailMessage) -> Result<(), MailError>;
}

/// Logs messages instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, sender: Option<&str>, message: &EmailMessage) -> Result<(), MailError> {
        info!(
            to = %message.to,
            from = sender.unwrap_or("-"),
            subject = %message.subject,
            "Email (log only)"
        );
        Ok(())
    }
}

/// Writes each message as an `.html` file into a directory.
#[derive(Debug, Clone)]
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Mailer for OutboxMailer {
    fn send(&self, sender: Option<&str>, message: &EmailMessage) -> Result<(), MailError> {
        std::fs::create_dir_all(&self.dir)?;
        let file_name: String = format!("{:032x}.html", rand::random::<u128>());
        let body: String = format!(
            "<!-- From: {}\n     To: {}\n     Subject: {} -->\n{}",
            sender.unwrap_or(""),
            message.to,
            message.subject,
            message.html
        );
        std::fs::write(self.dir.join(&file_name), body)?;
        debug!(file = %file_name, to = %message.to, "Email written to outbox");
        Ok(())
    }
}

/// Keeps every message in memory. Used by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail: bool,
}

impl RecordingMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    /// Messages accepted so far.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, _sender: Option<&str>, message: &EmailMessage) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Unavailable(String::from("recording mailer set to fail")));
        }
        self.sent
            .lock()
            .map_err(|e| MailError::Unavailable(e.to_string()))?
            .push(message.clone());
        Ok(())
    }
}

/// Renders the status update email.
#[must_use]
pub fn status_update_email(to: &str, job_title: &str, status: ApplicationStatus) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: format!("Application Status Update - {job_title}"),
        html: format!(
            r"
    <h2>Application Status Update</h2>
    <p>Dear Candidate,</p>
    <p>Your application status for the position <strong>{job_title}</strong> has been updated to: <strong>{}</strong></p>
    <p>Please log in to the TalentBridge portal for more details.</p>
    <p>Best regards,<br>HR Team</p>
    ",
            status.label()
        ),
    }
}

/// Renders the interview invitation email.
#[must_use]
pub fn interview_invitation_email(
    to: &str,
    job_title: &str,
    scheduled_at: PrimitiveDateTime,
    interview_type: InterviewType,
    location_or_link: Option<&str>,
) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: format!("Interview Invitation - {job_title}"),
        html: format!(
            r"
    <h2>Interview Invitation</h2>
    <p>Dear Candidate,</p>
    <p>Congratulations! You have been selected for an interview for the position <strong>{job_title}</strong>.</p>
    <p><strong>Interview Details:</strong></p>
    <ul>
        <li>Date & Time: {}</li>
        <li>Type: {}</li>
        <li>Location/Link: {}</li>
    </ul>
    <p>Please confirm your attendance by logging into the TalentBridge portal.</p>
    <p>Best regards,<br>HR Team</p>
    ",
            format_schedule_for_display(scheduled_at),
            interview_type.label(),
            location_or_link.unwrap_or("")
        ),
    }
}

/// Renders the new job posting email.
#[must_use]
pub fn new_job_email(to: &str, job_title: &str, department: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: format!("New Job Opportunity - {job_title}"),
        html: format!(
            r"
    <h2>New Job Opportunity</h2>
    <p>Dear Team Member,</p>
    <p>A new job opportunity has been posted that might interest you:</p>
    <p><strong>Position:</strong> {job_title}</p>
    <p><strong>Department:</strong> {department}</p>
    <p>Visit the TalentBridge portal to view details and apply.</p>
    <p>Best regards,<br>HR Team</p>
    "
        ),
    }
}

/// Renders the email for a workflow notification.
#[must_use]
pub fn email_for_intent(intent: &NotificationIntent, to: &str) -> EmailMessage {
    match intent {
        NotificationIntent::StatusUpdate {
            job_title, status, ..
        } => status_update_email(to, job_title, *status),
        NotificationIntent::InterviewInvitation {
            job_title,
            scheduled_at,
            interview_type,
            location_or_link,
            ..
        } => interview_invitation_email(
            to,
            job_title,
            *scheduled_at,
            *interview_type,
            location_or_link.as_deref(),
        ),
    }
}

/// Hands messages to a mailer, tolerating failures.
#[derive(Clone)]
pub struct NotificationDispatcher {
    mailer: Arc<dyn Mailer>,
    default_sender: Option<String>,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("default_sender", &self.default_sender)
            .finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>, default_sender: Option<String>) -> Self {
        Self {
            mailer,
            default_sender,
        }
    }

    /// Sends every message, returning how many were accepted.
    ///
    /// A failed send is logged and skipped.
    pub fn dispatch(&self, messages: &[EmailMessage]) -> usize {
        let mut delivered: usize = 0;
        for message in messages {
            match self.mailer.send(self.default_sender.as_deref(), message) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %e,
                    "Error sending email"
                ),
            }
        }
        delivered
    }
}
