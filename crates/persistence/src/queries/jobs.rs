// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job board queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use talent_bridge_domain::{Job, JobStatus, PageRequest, parse_optional_date};
use tracing::debug;

use crate::data_models::JobFilter;
use crate::diesel_schema::jobs;
use crate::error::PersistenceError;

/// Diesel Queryable struct for job rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = jobs)]
pub(crate) struct JobRow {
    job_id: i64,
    title: String,
    department: String,
    location: String,
    description: String,
    requirements: Option<String>,
    skills_required: Option<String>,
    salary_range: Option<String>,
    job_type: String,
    status: String,
    deadline: Option<String>,
    posted_by: i64,
    created_at: String,
    updated_at: String,
}

impl JobRow {
    pub(crate) fn into_job(self) -> Result<Job, PersistenceError> {
        Ok(Job {
            job_id: self.job_id,
            title: self.title,
            department: self.department,
            location: self.location,
            description: self.description,
            requirements: self.requirements,
            skills_required: self.skills_required,
            salary_range: self.salary_range,
            job_type: self.job_type,
            status: self.status.parse()?,
            deadline: parse_optional_date("deadline", self.deadline.as_deref())?,
            posted_by: self.posted_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the active-jobs query with the board filters applied.
///
/// Department and location match as substrings; search matches title,
/// description, or required skills. `SQLite` `LIKE` ignores ASCII case.
fn active_jobs_query(filter: &JobFilter) -> jobs::BoxedQuery<'static, Sqlite> {
    let mut query = jobs::table
        .filter(jobs::status.eq(JobStatus::Active.as_str()))
        .into_boxed();

    if let Some(department) = non_blank(filter.department.as_deref()) {
        query = query.filter(jobs::department.like(format!("%{department}%")));
    }
    if let Some(location) = non_blank(filter.location.as_deref()) {
        query = query.filter(jobs::location.like(format!("%{location}%")));
    }
    if let Some(search) = non_blank(filter.search.as_deref()) {
        let pattern: String = format!("%{search}%");
        query = query.filter(
            jobs::title
                .like(pattern.clone())
                .or(jobs::description.like(pattern.clone()))
                .or(jobs::skills_required.like(pattern)),
        );
    }

    query
}

/// Retrieves a job by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job does not exist.
pub fn get_job(conn: &mut SqliteConnection, job_id: i64) -> Result<Option<Job>, PersistenceError> {
    debug!(job_id, "Looking up job");

    jobs::table
        .filter(jobs::job_id.eq(job_id))
        .select(JobRow::as_select())
        .first::<JobRow>(conn)
        .optional()?
        .map(JobRow::into_job)
        .transpose()
}

/// Lists one page of active jobs, newest first, and the total match count.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_active_jobs(
    conn: &mut SqliteConnection,
    filter: &JobFilter,
    page: PageRequest,
) -> Result<(Vec<Job>, i64), PersistenceError> {
    let total: i64 = active_jobs_query(filter).count().get_result(conn)?;

    let rows: Vec<JobRow> = active_jobs_query(filter)
        .select(JobRow::as_select())
        .order((jobs::created_at.desc(), jobs::job_id.desc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)?;

    debug!(total, returned = rows.len(), "Listed active jobs");
    let jobs: Vec<Job> = rows
        .into_iter()
        .map(JobRow::into_job)
        .collect::<Result<_, _>>()?;
    Ok((jobs, total))
}

/// Lists the most recently posted active jobs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_active_jobs(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<Job>, PersistenceError> {
    jobs::table
        .filter(jobs::status.eq(JobStatus::Active.as_str()))
        .select(JobRow::as_select())
        .order((jobs::created_at.desc(), jobs::job_id.desc()))
        .limit(limit)
        .load::<JobRow>(conn)?
        .into_iter()
        .map(JobRow::into_job)
        .collect()
}

/// Lists every job ordered by title, for filter dropdowns.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_jobs_by_title(conn: &mut SqliteConnection) -> Result<Vec<Job>, PersistenceError> {
    jobs::table
        .select(JobRow::as_select())
        .order((jobs::title.asc(), jobs::job_id.asc()))
        .load::<JobRow>(conn)?
        .into_iter()
        .map(JobRow::into_job)
        .collect()
}

/// Lists the distinct departments across all jobs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn distinct_departments(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    Ok(jobs::table
        .select(jobs::department)
        .distinct()
        .order(jobs::department.asc())
        .load(conn)?)
}

/// Lists the distinct locations across all jobs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn distinct_locations(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    Ok(jobs::table
        .select(jobs::location)
        .distinct()
        .order(jobs::location.asc())
        .load(conn)?)
}

/// Counts jobs, optionally restricted to one status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_jobs(
    conn: &mut SqliteConnection,
    status: Option<JobStatus>,
) -> Result<i64, PersistenceError> {
    let mut query = jobs::table.into_boxed::<Sqlite>();
    if let Some(status) = status {
        query = query.filter(jobs::status.eq(status.as_str()));
    }
    Ok(query.count().get_result(conn)?)
}
