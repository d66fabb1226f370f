// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Status and type fields travel as their lowercase tags (`submitted`,
//! `in-person`, ...). Requests carry them as plain strings and handlers
//! parse them, so an unknown tag surfaces as invalid input.

use num_traits::ToPrimitive;
use talent_bridge_domain::{
    Application, Interview, Job, Notification, PageRequest, User, format_date,
    format_schedule_for_display, format_schedule_for_storage,
};
use talent_bridge_persistence::{ApplicationSummary, DashboardCounts, InterviewSummary};

use crate::notifications::EmailMessage;

/// A handler's response together with the emails to send once the change
/// is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome<T> {
    pub response: T,
    pub emails: Vec<EmailMessage>,
}

impl<T> HandlerOutcome<T> {
    #[must_use]
    pub const fn quiet(response: T) -> Self {
        Self {
            response,
            emails: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_emails(response: T, emails: Vec<EmailMessage>) -> Self {
        Self { response, emails }
    }
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total,
            total_pages: request.total_pages(total),
        }
    }

    /// Wraps a complete list as a single page.
    #[must_use]
    pub fn single(items: Vec<T>) -> Self {
        let total: i64 = items.len().to_i64().unwrap_or(i64::MAX);
        let per_page: u32 = items.len().to_u32().unwrap_or(u32::MAX).max(1);
        Self {
            items,
            page: 1,
            per_page,
            total,
            total_pages: i64::from(total > 0),
        }
    }
}

/// A plain confirmation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// ========================================================================
// Views
// ========================================================================

/// A user as returned by the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub phone: Option<String>,
    pub resume_filename: Option<String>,
    pub created_at: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            department: user.department.clone(),
            location: user.location.clone(),
            skills: user.skills.clone(),
            phone: user.phone.clone(),
            resume_filename: user.resume_filename.clone(),
            created_at: user.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobInfo {
    pub job_id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub requirements: Option<String>,
    pub skills_required: Option<String>,
    pub salary_range: Option<String>,
    pub job_type: String,
    pub status: String,
    /// `YYYY-MM-DD`.
    pub deadline: Option<String>,
    pub posted_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Job> for JobInfo {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.job_id,
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            skills_required: job.skills_required.clone(),
            salary_range: job.salary_range.clone(),
            job_type: job.job_type.clone(),
            status: job.status.as_str().to_string(),
            deadline: job.deadline.map(format_date),
            posted_by: job.posted_by,
            created_at: job.created_at.clone(),
            updated_at: job.updated_at.clone(),
        }
    }
}

/// A job reduced to what a filter dropdown needs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobOption {
    pub job_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationInfo {
    pub application_id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub status: String,
    pub status_label: String,
    pub cover_letter: Option<String>,
    pub resume_filename: Option<String>,
    pub hr_notes: Option<String>,
    pub applied_at: String,
    pub updated_at: String,
}

impl From<&Application> for ApplicationInfo {
    fn from(application: &Application) -> Self {
        Self {
            application_id: application.application_id,
            job_id: application.job_id,
            user_id: application.user_id,
            status: application.status.as_str().to_string(),
            status_label: application.status.label().to_string(),
            cover_letter: application.cover_letter.clone(),
            resume_filename: application.resume_filename.clone(),
            hr_notes: application.hr_notes.clone(),
            applied_at: application.applied_at.clone(),
            updated_at: application.updated_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationSummaryInfo {
    pub application: ApplicationInfo,
    pub job_title: String,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl From<&ApplicationSummary> for ApplicationSummaryInfo {
    fn from(summary: &ApplicationSummary) -> Self {
        Self {
            application: ApplicationInfo::from(&summary.application),
            job_title: summary.job_title.clone(),
            applicant_name: summary.applicant_name.clone(),
            applicant_email: summary.applicant_email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterviewInfo {
    pub interview_id: i64,
    pub application_id: i64,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub scheduled_at: String,
    /// e.g. `June 01, 2024 at 02:30 PM`.
    pub scheduled_at_display: String,
    pub duration_minutes: i32,
    pub interview_type: String,
    pub location_or_link: Option<String>,
    pub interviewer_email: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Interview> for InterviewInfo {
    fn from(interview: &Interview) -> Self {
        Self {
            interview_id: interview.interview_id,
            application_id: interview.application_id,
            scheduled_at: format_schedule_for_storage(interview.scheduled_at),
            scheduled_at_display: format_schedule_for_display(interview.scheduled_at),
            duration_minutes: interview.duration_minutes,
            interview_type: interview.interview_type.as_str().to_string(),
            location_or_link: interview.location_or_link.clone(),
            interviewer_email: interview.interviewer_email.clone(),
            notes: interview.notes.clone(),
            status: interview.status.as_str().to_string(),
            created_at: interview.created_at.clone(),
            updated_at: interview.updated_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterviewSummaryInfo {
    pub interview: InterviewInfo,
    pub job_title: String,
    pub applicant_name: String,
}

impl From<&InterviewSummary> for InterviewSummaryInfo {
    fn from(summary: &InterviewSummary) -> Self {
        Self {
            interview: InterviewInfo::from(&summary.interview),
            job_title: summary.job_title.clone(),
            applicant_name: summary.applicant_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationInfo {
    pub notification_id: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl From<&Notification> for NotificationInfo {
    fn from(notification: &Notification) -> Self {
        Self {
            notification_id: notification.notification_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            created_at: notification.created_at.clone(),
        }
    }
}

// ========================================================================
// Accounts
// ========================================================================

/// API request to register an employee account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
    pub message: String,
}

/// API request to log in and create a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub login: String,
    pub password: String,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The session token (opaque).
    pub session_token: String,
    pub user: UserInfo,
    /// ISO 8601 expiry of the session.
    pub expires_at: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WhoAmIResponse {
    pub user: UserInfo,
    pub unread_notifications: i64,
}

// ========================================================================
// Jobs
// ========================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListJobsRequest {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListJobsResponse {
    pub jobs: Page<JobInfo>,
    pub departments: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobDetailResponse {
    pub job: JobInfo,
    /// The caller's application to this job; only looked up for employees.
    pub existing_application: Option<ApplicationInfo>,
}

/// API request to post or edit a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub skills_required: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    /// Defaults to `Full-time`.
    #[serde(default)]
    pub job_type: Option<String>,
    /// Defaults to `active`.
    #[serde(default)]
    pub status: Option<String>,
    /// `YYYY-MM-DD`; blank clears the deadline.
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobWriteResponse {
    pub job_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteJobResponse {
    pub job_id: i64,
    pub applications_removed: usize,
    pub interviews_removed: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeDashboardResponse {
    pub recent_jobs: Vec<JobInfo>,
    pub my_applications: Vec<ApplicationSummaryInfo>,
    pub unread_notifications: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardStats {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
}

impl From<DashboardCounts> for DashboardStats {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            total_jobs: counts.total_jobs,
            active_jobs: counts.active_jobs,
            total_applications: counts.total_applications,
            pending_applications: counts.pending_applications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HrDashboardResponse {
    pub stats: DashboardStats,
    pub recent_applications: Vec<ApplicationSummaryInfo>,
}

// ========================================================================
// Applications
// ========================================================================

/// API request to apply to a job. The resume travels separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitApplicationRequest {
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationWriteResponse {
    pub application_id: i64,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManageApplicationsRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManageApplicationsResponse {
    pub applications: Page<ApplicationSummaryInfo>,
    /// Every job, ordered by title, for the filter dropdown.
    pub jobs: Vec<JobOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationDetailResponse {
    pub application: ApplicationInfo,
    pub job: JobInfo,
    pub applicant: UserInfo,
    pub interviews: Vec<InterviewInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
    #[serde(default)]
    pub hr_notes: Option<String>,
}

// ========================================================================
// Interviews
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleInterviewRequest {
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// `HH:MM`, 24-hour, zero padded.
    pub scheduled_time: String,
    /// Minutes; defaults to 60.
    #[serde(default)]
    pub duration: Option<i32>,
    /// Defaults to `in-person`.
    #[serde(default)]
    pub interview_type: Option<String>,
    #[serde(default)]
    pub location_or_link: Option<String>,
    #[serde(default)]
    pub interviewer_email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterviewWriteResponse {
    pub interview_id: i64,
    pub application_id: i64,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListInterviewsRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListInterviewsResponse {
    pub interviews: Page<InterviewSummaryInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateInterviewRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RescheduleInterviewRequest {
    pub scheduled_date: String,
    pub scheduled_time: String,
}

// ========================================================================
// Profile
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileResponse {
    pub user: UserInfo,
}

/// API request to edit the caller's profile. A replacement resume travels
/// separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditProfileRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// ========================================================================
// Notifications
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<NotificationInfo>,
    pub unread: i64,
}
