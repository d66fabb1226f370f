// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::{Application, ApplicationStatus, Interview, InterviewStatus, User};

/// A user together with their stored password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// A stored login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Optional filters for the job board. Only active jobs are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub department: Option<String>,
    pub location: Option<String>,
    /// Matched against title, description, and required skills.
    pub search: Option<String>,
}

/// Optional filters for the application review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<i64>,
}

/// An application with the job title and applicant details used in lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub application: Application,
    pub job_title: String,
    pub applicant_name: String,
    pub applicant_email: String,
}

/// An interview with the job title and applicant used in lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSummary {
    pub interview: Interview,
    pub job_title: String,
    pub applicant_name: String,
    pub applicant_user_id: i64,
}

/// Optional filter for the staff interview list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterviewFilter {
    pub status: Option<InterviewStatus>,
}

/// Rows removed by a job deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDeleteSummary {
    pub job_id: i64,
    pub applications_removed: usize,
    pub interviews_removed: usize,
}

/// Ids produced while committing a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistTransitionResult {
    /// Set when the transition created an application.
    pub application_id: Option<i64>,
    /// Set when the transition created an interview.
    pub interview_id: Option<i64>,
    /// Set when an in-app notification was written.
    pub notification_id: Option<i64>,
}

/// Headline numbers for the staff dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
}
