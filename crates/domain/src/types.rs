// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::interview::{InterviewStatus, InterviewType};
use crate::role::Role;
use crate::status::{ApplicationStatus, JobStatus};
use time::{Date, PrimitiveDateTime};

/// A user account, without its credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub phone: Option<String>,
    pub resume_filename: Option<String>,
    pub created_at: String,
}

impl User {
    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields required to register an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub phone: Option<String>,
}

/// Editable profile fields. Every field is written as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub requirements: Option<String>,
    pub skills_required: Option<String>,
    pub salary_range: Option<String>,
    pub job_type: String,
    pub status: JobStatus,
    pub deadline: Option<Date>,
    pub posted_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Default employment type for new postings.
pub const DEFAULT_JOB_TYPE: &str = "Full-time";

/// Posting fields supplied on create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub requirements: Option<String>,
    pub skills_required: Option<String>,
    pub salary_range: Option<String>,
    pub job_type: String,
    pub status: JobStatus,
    pub deadline: Option<Date>,
}

/// A candidate's application to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub application_id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub cover_letter: Option<String>,
    pub resume_filename: Option<String>,
    pub status: ApplicationStatus,
    pub hr_notes: Option<String>,
    pub applied_at: String,
    pub updated_at: String,
}

/// An application that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: i64,
    pub user_id: i64,
    pub cover_letter: Option<String>,
    pub resume_filename: Option<String>,
}

/// An interview attached to an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interview {
    pub interview_id: i64,
    pub application_id: i64,
    pub scheduled_at: PrimitiveDateTime,
    pub duration_minutes: i32,
    pub interview_type: InterviewType,
    pub location_or_link: Option<String>,
    pub interviewer_email: Option<String>,
    pub notes: Option<String>,
    pub status: InterviewStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// An interview that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    pub application_id: i64,
    pub scheduled_at: PrimitiveDateTime,
    pub duration_minutes: i32,
    pub interview_type: InterviewType,
    pub location_or_link: Option<String>,
    pub interviewer_email: Option<String>,
    pub notes: Option<String>,
}

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notification_id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

/// One-based page selection for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Builds a page request. Page zero is treated as the first page and
    /// `per_page` is at least one.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Row limit for the query.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Row offset for the query.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Number of pages needed to hold `total` rows.
    #[must_use]
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        let per_page: i64 = i64::from(self.per_page);
        (total + per_page - 1) / per_page
    }
}
