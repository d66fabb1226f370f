// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::{ApplicationStatus, InterviewStatus, InterviewType};

/// A command represents user or HR intent as data only.
///
/// Commands are validated and applied against a `WorkflowContext`
/// holding the records they refer to. Date and time fields are carried
/// as entered and parsed during application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply to a job posting.
    SubmitApplication {
        job_id: i64,
        cover_letter: Option<String>,
        /// Original name of the uploaded resume, if any.
        resume_filename: Option<String>,
    },
    /// Set an application's status and reviewer notes.
    UpdateApplicationStatus {
        application_id: i64,
        status: ApplicationStatus,
        hr_notes: Option<String>,
    },
    /// Pull one's own application.
    WithdrawApplication { application_id: i64 },
    /// Book an interview for an application.
    ScheduleInterview {
        application_id: i64,
        date: String,
        time: String,
        duration_minutes: i32,
        interview_type: InterviewType,
        location_or_link: Option<String>,
        interviewer_email: Option<String>,
        notes: Option<String>,
    },
    /// Change an interview's status or notes. Absent fields are left as-is.
    UpdateInterview {
        interview_id: i64,
        status: Option<InterviewStatus>,
        notes: Option<String>,
    },
    /// Move an interview to a new date and time.
    RescheduleInterview {
        interview_id: i64,
        date: String,
        time: String,
    },
}

impl Command {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitApplication { .. } => "SubmitApplication",
            Self::UpdateApplicationStatus { .. } => "UpdateApplicationStatus",
            Self::WithdrawApplication { .. } => "WithdrawApplication",
            Self::ScheduleInterview { .. } => "ScheduleInterview",
            Self::UpdateInterview { .. } => "UpdateInterview",
            Self::RescheduleInterview { .. } => "RescheduleInterview",
        }
    }
}
