// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use talent_bridge_domain::{Application, ApplicationStatus, PageRequest};
use tracing::debug;

use crate::data_models::{ApplicationFilter, ApplicationSummary};
use crate::diesel_schema::{applications, jobs, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for application rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = applications)]
pub(crate) struct ApplicationRow {
    application_id: i64,
    job_id: i64,
    user_id: i64,
    cover_letter: Option<String>,
    resume_filename: Option<String>,
    status: String,
    hr_notes: Option<String>,
    applied_at: String,
    updated_at: String,
}

impl ApplicationRow {
    pub(crate) fn into_application(self) -> Result<Application, PersistenceError> {
        Ok(Application {
            application_id: self.application_id,
            job_id: self.job_id,
            user_id: self.user_id,
            cover_letter: self.cover_letter,
            resume_filename: self.resume_filename,
            status: self.status.parse()?,
            hr_notes: self.hr_notes,
            applied_at: self.applied_at,
            updated_at: self.updated_at,
        })
    }
}

type SummaryTuple = (ApplicationRow, String, String, String, String);

fn into_summary(
    (row, job_title, first_name, last_name, email): SummaryTuple,
) -> Result<ApplicationSummary, PersistenceError> {
    Ok(ApplicationSummary {
        application: row.into_application()?,
        job_title,
        applicant_name: format!("{first_name} {last_name}"),
        applicant_email: email,
    })
}

/// Retrieves an application by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the application does not exist.
pub fn get_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<Option<Application>, PersistenceError> {
    debug!(application_id, "Looking up application");

    applications::table
        .filter(applications::application_id.eq(application_id))
        .select(ApplicationRow::as_select())
        .first::<ApplicationRow>(conn)
        .optional()?
        .map(ApplicationRow::into_application)
        .transpose()
}

/// Retrieves a user's application for a job, if one exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_application(
    conn: &mut SqliteConnection,
    job_id: i64,
    user_id: i64,
) -> Result<Option<Application>, PersistenceError> {
    applications::table
        .filter(applications::job_id.eq(job_id))
        .filter(applications::user_id.eq(user_id))
        .select(ApplicationRow::as_select())
        .first::<ApplicationRow>(conn)
        .optional()?
        .map(ApplicationRow::into_application)
        .transpose()
}

/// Lists one page of a user's applications, newest first, with the total.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applications_for_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    page: PageRequest,
) -> Result<(Vec<ApplicationSummary>, i64), PersistenceError> {
    let total: i64 = applications::table
        .filter(applications::user_id.eq(user_id))
        .count()
        .get_result(conn)?;

    let rows: Vec<SummaryTuple> = applications::table
        .inner_join(jobs::table)
        .inner_join(users::table)
        .filter(applications::user_id.eq(user_id))
        .select((
            ApplicationRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::email,
        ))
        .order((applications::applied_at.desc(), applications::application_id.desc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)?;

    let summaries: Vec<ApplicationSummary> = rows
        .into_iter()
        .map(into_summary)
        .collect::<Result<_, _>>()?;
    Ok((summaries, total))
}

/// Lists a user's most recent applications.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_applications_for_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    limit: i64,
) -> Result<Vec<ApplicationSummary>, PersistenceError> {
    applications::table
        .inner_join(jobs::table)
        .inner_join(users::table)
        .filter(applications::user_id.eq(user_id))
        .select((
            ApplicationRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::email,
        ))
        .order((applications::applied_at.desc(), applications::application_id.desc()))
        .limit(limit)
        .load::<SummaryTuple>(conn)?
        .into_iter()
        .map(into_summary)
        .collect()
}

/// Lists one page of applications for review, newest first, with the total.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applications(
    conn: &mut SqliteConnection,
    filter: ApplicationFilter,
    page: PageRequest,
) -> Result<(Vec<ApplicationSummary>, i64), PersistenceError> {
    let mut count_query = applications::table.into_boxed::<Sqlite>();
    let mut query = applications::table
        .inner_join(jobs::table)
        .inner_join(users::table)
        .into_boxed::<Sqlite>();
    if let Some(status) = filter.status {
        count_query = count_query.filter(applications::status.eq(status.as_str()));
        query = query.filter(applications::status.eq(status.as_str()));
    }
    if let Some(job_id) = filter.job_id {
        count_query = count_query.filter(applications::job_id.eq(job_id));
        query = query.filter(applications::job_id.eq(job_id));
    }

    let total: i64 = count_query.count().get_result(conn)?;
    let rows: Vec<SummaryTuple> = query
        .select((
            ApplicationRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::email,
        ))
        .order((applications::applied_at.desc(), applications::application_id.desc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)?;

    debug!(total, returned = rows.len(), "Listed applications for review");
    let summaries: Vec<ApplicationSummary> = rows
        .into_iter()
        .map(into_summary)
        .collect::<Result<_, _>>()?;
    Ok((summaries, total))
}

/// Lists the most recent applications across all jobs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_applications(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<ApplicationSummary>, PersistenceError> {
    applications::table
        .inner_join(jobs::table)
        .inner_join(users::table)
        .select((
            ApplicationRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::email,
        ))
        .order((applications::applied_at.desc(), applications::application_id.desc()))
        .limit(limit)
        .load::<SummaryTuple>(conn)?
        .into_iter()
        .map(into_summary)
        .collect()
}

/// Counts applications, optionally restricted to one status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_applications(
    conn: &mut SqliteConnection,
    status: Option<ApplicationStatus>,
) -> Result<i64, PersistenceError> {
    let mut query = applications::table.into_boxed::<Sqlite>();
    if let Some(status) = status {
        query = query.filter(applications::status.eq(status.as_str()));
    }
    Ok(query.count().get_result(conn)?)
}
