// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the TalentBridge recruiting portal.
//!
//! Built on Diesel over `SQLite`. The schema is created by embedded
//! migrations when a connection is opened, and foreign key enforcement is
//! verified before the adapter is handed out.
//!
//! ## Layout
//!
//! - `queries/` holds read-only lookups, one module per table
//! - `mutations/` holds writes; `mutations::transitions` commits workflow
//!   results and their in-app notifications atomically
//! - `backend` holds connection setup and `SQLite` helpers
//!
//! ## Testing
//!
//! `Persistence::new_in_memory` opens a uniquely named shared in-memory
//! database and hashes passwords with the minimum bcrypt cost, so tests
//! stay isolated and fast.

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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use talent_bridge::TransitionResult;
use talent_bridge_domain::{
    Application, ApplicationStatus, Interview, Job, JobDraft, JobStatus, NewUser, Notification,
    PageRequest, ProfileUpdate, User,
};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// bcrypt cost for file-backed databases and for the running server.
pub const DEFAULT_PASSWORD_COST: u32 = bcrypt::DEFAULT_COST;

/// bcrypt cost for throwaway in-memory databases.
const IN_MEMORY_PASSWORD_COST: u32 = 4;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    ApplicationFilter, ApplicationSummary, CascadeDeleteSummary, DashboardCounts, InterviewFilter,
    InterviewSummary, JobFilter, PersistTransitionResult, SessionData, UserCredentials,
};
pub use error::PersistenceError;
pub use queries::users::verify_password;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
    password_cost: u32,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// Each call receives its own database, named from an atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            password_cost: IN_MEMORY_PASSWORD_COST,
        })
    }

    /// Creates a persistence adapter over a database file, creating it if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            password_cost: DEFAULT_PASSWORD_COST,
        })
    }

    /// Overrides the bcrypt cost used for new password hashes.
    #[must_use]
    pub const fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    /// The bcrypt cost used for new password hashes.
    #[must_use]
    pub const fn password_cost(&self) -> u32 {
        self.password_cost
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Commits a workflow transition and its in-app notification atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is committed in that case.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<PersistTransitionResult, PersistenceError> {
        mutations::transitions::persist_transition(&mut self.conn, result)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user account.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the username or email is
    /// taken.
    pub fn create_user(&mut self, user: &NewUser, password: &str) -> Result<i64, PersistenceError> {
        mutations::users::create_user(&mut self.conn, user, password, self.password_cost)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        Ok(queries::users::get_user_by_id(&mut self.conn, user_id)?.map(|c| c.user))
    }

    /// Retrieves a user and password hash by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_credentials(
        &mut self,
        user_id: i64,
    ) -> Result<Option<UserCredentials>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// Retrieves a user by username or email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_login(
        &mut self,
        login: &str,
    ) -> Result<Option<UserCredentials>, PersistenceError> {
        queries::users::get_user_by_login(&mut self.conn, login)
    }

    /// Returns true if the username is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn username_exists(&mut self, username: &str) -> Result<bool, PersistenceError> {
        queries::users::username_exists(&mut self.conn, username)
    }

    /// Returns true if the email address is registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn email_exists(&mut self, email: &str) -> Result<bool, PersistenceError> {
        queries::users::email_exists(&mut self.conn, email)
    }

    /// Overwrites the editable profile fields, recording a new resume name
    /// in the same transaction when one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the update fails.
    pub fn update_profile(
        &mut self,
        user_id: i64,
        update: &ProfileUpdate,
        resume_filename: Option<&str>,
    ) -> Result<(), PersistenceError> {
        mutations::users::update_profile(&mut self.conn, user_id, update, resume_filename)
    }

    /// Replaces the user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or the update fails.
    pub fn update_password(
        &mut self,
        user_id: i64,
        new_password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::users::update_password(&mut self.conn, user_id, new_password, self.password_cost)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Creates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::sessions::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::sessions::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    /// Posts a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_job(&mut self, draft: &JobDraft, posted_by: i64) -> Result<i64, PersistenceError> {
        mutations::jobs::create_job(&mut self.conn, draft, posted_by)
    }

    /// Overwrites a job's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the job does not exist.
    pub fn update_job(&mut self, job_id: i64, draft: &JobDraft) -> Result<(), PersistenceError> {
        mutations::jobs::update_job(&mut self.conn, job_id, draft)
    }

    /// Deletes a job, its applications, and their interviews in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the job does not exist.
    pub fn delete_job(&mut self, job_id: i64) -> Result<CascadeDeleteSummary, PersistenceError> {
        mutations::jobs::delete_job_cascade(&mut self.conn, job_id)
    }

    /// Retrieves a job by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_job(&mut self, job_id: i64) -> Result<Option<Job>, PersistenceError> {
        queries::jobs::get_job(&mut self.conn, job_id)
    }

    /// Lists one page of active jobs matching the filter, with the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_active_jobs(
        &mut self,
        filter: &JobFilter,
        page: PageRequest,
    ) -> Result<(Vec<Job>, i64), PersistenceError> {
        queries::jobs::list_active_jobs(&mut self.conn, filter, page)
    }

    /// Lists the most recently posted active jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recent_active_jobs(&mut self, limit: i64) -> Result<Vec<Job>, PersistenceError> {
        queries::jobs::recent_active_jobs(&mut self.conn, limit)
    }

    /// Lists all jobs ordered by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_jobs_by_title(&mut self) -> Result<Vec<Job>, PersistenceError> {
        queries::jobs::list_jobs_by_title(&mut self.conn)
    }

    /// Lists distinct departments and locations across all jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn job_filter_options(&mut self) -> Result<(Vec<String>, Vec<String>), PersistenceError> {
        let departments: Vec<String> = queries::jobs::distinct_departments(&mut self.conn)?;
        let locations: Vec<String> = queries::jobs::distinct_locations(&mut self.conn)?;
        Ok((departments, locations))
    }

    /// Computes the staff dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn dashboard_counts(&mut self) -> Result<DashboardCounts, PersistenceError> {
        Ok(DashboardCounts {
            total_jobs: queries::jobs::count_jobs(&mut self.conn, None)?,
            active_jobs: queries::jobs::count_jobs(&mut self.conn, Some(JobStatus::Active))?,
            total_applications: queries::applications::count_applications(&mut self.conn, None)?,
            pending_applications: queries::applications::count_applications(
                &mut self.conn,
                Some(ApplicationStatus::Submitted),
            )?,
        })
    }

    // ========================================================================
    // Applications
    // ========================================================================

    /// Retrieves an application by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_application(
        &mut self,
        application_id: i64,
    ) -> Result<Option<Application>, PersistenceError> {
        queries::applications::get_application(&mut self.conn, application_id)
    }

    /// Retrieves a user's application for a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_application(
        &mut self,
        job_id: i64,
        user_id: i64,
    ) -> Result<Option<Application>, PersistenceError> {
        queries::applications::find_application(&mut self.conn, job_id, user_id)
    }

    /// Lists one page of a user's applications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_applications_for_user(
        &mut self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<(Vec<ApplicationSummary>, i64), PersistenceError> {
        queries::applications::list_applications_for_user(&mut self.conn, user_id, page)
    }

    /// Lists a user's most recent applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recent_applications_for_user(
        &mut self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<ApplicationSummary>, PersistenceError> {
        queries::applications::recent_applications_for_user(&mut self.conn, user_id, limit)
    }

    /// Lists one page of applications for review, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_applications(
        &mut self,
        filter: ApplicationFilter,
        page: PageRequest,
    ) -> Result<(Vec<ApplicationSummary>, i64), PersistenceError> {
        queries::applications::list_applications(&mut self.conn, filter, page)
    }

    /// Lists the most recent applications across all jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recent_applications(
        &mut self,
        limit: i64,
    ) -> Result<Vec<ApplicationSummary>, PersistenceError> {
        queries::applications::recent_applications(&mut self.conn, limit)
    }

    // ========================================================================
    // Interviews
    // ========================================================================

    /// Retrieves an interview by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_interview(
        &mut self,
        interview_id: i64,
    ) -> Result<Option<Interview>, PersistenceError> {
        queries::interviews::get_interview(&mut self.conn, interview_id)
    }

    /// Lists the interviews booked for an application.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_interviews_for_application(
        &mut self,
        application_id: i64,
    ) -> Result<Vec<Interview>, PersistenceError> {
        queries::interviews::list_interviews_for_application(&mut self.conn, application_id)
    }

    /// Lists every interview on a user's applications, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_interviews_for_user(
        &mut self,
        user_id: i64,
    ) -> Result<Vec<InterviewSummary>, PersistenceError> {
        queries::interviews::list_interviews_for_user(&mut self.conn, user_id)
    }

    /// Lists one page of all interviews, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_interviews(
        &mut self,
        filter: InterviewFilter,
        page: PageRequest,
    ) -> Result<(Vec<InterviewSummary>, i64), PersistenceError> {
        queries::interviews::list_interviews(&mut self.conn, filter, page)
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Retrieves a notification by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_notification(
        &mut self,
        notification_id: i64,
    ) -> Result<Option<Notification>, PersistenceError> {
        queries::notifications::get_notification(&mut self.conn, notification_id)
    }

    /// Lists a user's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_notifications(
        &mut self,
        user_id: i64,
    ) -> Result<Vec<Notification>, PersistenceError> {
        queries::notifications::list_notifications(&mut self.conn, user_id)
    }

    /// Counts a user's unread notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_unread_notifications(&mut self, user_id: i64) -> Result<i64, PersistenceError> {
        queries::notifications::count_unread(&mut self.conn, user_id)
    }

    /// Marks a notification as read.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the notification does not exist.
    pub fn mark_notification_read(&mut self, notification_id: i64) -> Result<(), PersistenceError> {
        mutations::notifications::mark_notification_read(&mut self.conn, notification_id)
    }
}
