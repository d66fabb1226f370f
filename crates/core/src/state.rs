// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::{
    Application, ApplicationStatus, Interview, InterviewStatus, InterviewType, Job,
    NewApplication, NewInterview, format_schedule_for_display,
};
use time::PrimitiveDateTime;

/// The records a command operates on, loaded by the caller.
///
/// Records are fetched by explicit id lookups; nothing here navigates
/// relationships on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowContext {
    /// The job the application belongs to.
    pub job: Option<Job>,
    /// The application being acted upon.
    pub application: Option<Application>,
    /// The interview being acted upon.
    pub interview: Option<Interview>,
    /// The actor's existing application for the job, checked on submit.
    pub existing_application: Option<Application>,
}

impl WorkflowContext {
    /// Context for submitting an application to `job`.
    #[must_use]
    pub const fn for_submission(job: Job, existing_application: Option<Application>) -> Self {
        Self {
            job: Some(job),
            application: None,
            interview: None,
            existing_application,
        }
    }

    /// Context for acting on an application.
    #[must_use]
    pub const fn for_application(application: Application, job: Job) -> Self {
        Self {
            job: Some(job),
            application: Some(application),
            interview: None,
            existing_application: None,
        }
    }

    /// Context for acting on an interview.
    #[must_use]
    pub const fn for_interview(interview: Interview, application: Application, job: Job) -> Self {
        Self {
            job: Some(job),
            application: Some(application),
            interview: Some(interview),
            existing_application: None,
        }
    }
}

/// The store change a successful command requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Insert a new application with status `submitted`.
    CreateApplication(NewApplication),
    /// Overwrite status and reviewer notes.
    ReviewApplication {
        application_id: i64,
        status: ApplicationStatus,
        hr_notes: Option<String>,
    },
    /// Overwrite status only.
    SetApplicationStatus {
        application_id: i64,
        status: ApplicationStatus,
    },
    /// Insert an interview and move its application to `interview`,
    /// both in one transaction.
    ScheduleInterview(NewInterview),
    /// Overwrite the supplied interview fields.
    UpdateInterview {
        interview_id: i64,
        status: Option<InterviewStatus>,
        notes: Option<String>,
    },
    /// Move the interview and mark it `rescheduled`.
    RescheduleInterview {
        interview_id: i64,
        scheduled_at: PrimitiveDateTime,
    },
}

/// A message the applicant should receive once the effect is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIntent {
    StatusUpdate {
        recipient_user_id: i64,
        job_title: String,
        status: ApplicationStatus,
    },
    InterviewInvitation {
        recipient_user_id: i64,
        job_title: String,
        scheduled_at: PrimitiveDateTime,
        interview_type: InterviewType,
        location_or_link: Option<String>,
    },
}

impl NotificationIntent {
    #[must_use]
    pub const fn recipient_user_id(&self) -> i64 {
        match self {
            Self::StatusUpdate {
                recipient_user_id, ..
            }
            | Self::InterviewInvitation {
                recipient_user_id, ..
            } => *recipient_user_id,
        }
    }

    #[must_use]
    pub fn job_title(&self) -> &str {
        match self {
            Self::StatusUpdate { job_title, .. } | Self::InterviewInvitation { job_title, .. } => {
                job_title
            }
        }
    }

    /// Title of the in-app notification.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::StatusUpdate { job_title, .. } => {
                format!("Application Status Update - {job_title}")
            }
            Self::InterviewInvitation { job_title, .. } => {
                format!("Interview Invitation - {job_title}")
            }
        }
    }

    /// Body of the in-app notification.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::StatusUpdate {
                job_title, status, ..
            } => format!(
                "Your application for {job_title} has been updated to: {}",
                status.label()
            ),
            Self::InterviewInvitation {
                job_title,
                scheduled_at,
                interview_type,
                ..
            } => format!(
                "{} interview for {job_title} scheduled on {}",
                interview_type.label(),
                format_schedule_for_display(*scheduled_at)
            ),
        }
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The store change to commit.
    pub effect: Effect,
    /// The notification to emit after commit, if any.
    pub notification: Option<NotificationIntent>,
}

impl TransitionResult {
    #[must_use]
    pub const fn silent(effect: Effect) -> Self {
        Self {
            effect,
            notification: None,
        }
    }

    #[must_use]
    pub const fn notifying(effect: Effect, notification: NotificationIntent) -> Self {
        Self {
            effect,
            notification: Some(notification),
        }
    }

    /// Replaces the resume name on a pending application with the name the
    /// file was stored under. Other effects are returned unchanged.
    #[must_use]
    pub fn with_stored_resume(mut self, stored_name: String) -> Self {
        if let Effect::CreateApplication(ref mut application) = self.effect {
            application.resume_filename = Some(stored_name);
        }
        self
    }
}
