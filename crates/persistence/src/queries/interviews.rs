// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use talent_bridge_domain::{Interview, PageRequest, parse_stored_schedule};
use tracing::debug;

use crate::data_models::{InterviewFilter, InterviewSummary};
use crate::diesel_schema::{applications, interviews, jobs, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for interview rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = interviews)]
pub(crate) struct InterviewRow {
    interview_id: i64,
    application_id: i64,
    scheduled_at: String,
    duration_minutes: i32,
    interview_type: String,
    location_or_link: Option<String>,
    interviewer_email: Option<String>,
    notes: Option<String>,
    status: String,
    created_at: String,
    updated_at: String,
}

impl InterviewRow {
    pub(crate) fn into_interview(self) -> Result<Interview, PersistenceError> {
        Ok(Interview {
            interview_id: self.interview_id,
            application_id: self.application_id,
            scheduled_at: parse_stored_schedule(&self.scheduled_at)?,
            duration_minutes: self.duration_minutes,
            interview_type: self.interview_type.parse()?,
            location_or_link: self.location_or_link,
            interviewer_email: self.interviewer_email,
            notes: self.notes,
            status: self.status.parse()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

type SummaryTuple = (InterviewRow, String, String, String, i64);

fn into_summary(
    (row, job_title, first_name, last_name, applicant_user_id): SummaryTuple,
) -> Result<InterviewSummary, PersistenceError> {
    Ok(InterviewSummary {
        interview: row.into_interview()?,
        job_title,
        applicant_name: format!("{first_name} {last_name}"),
        applicant_user_id,
    })
}

/// Retrieves an interview by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the interview does not exist.
pub fn get_interview(
    conn: &mut SqliteConnection,
    interview_id: i64,
) -> Result<Option<Interview>, PersistenceError> {
    debug!(interview_id, "Looking up interview");

    interviews::table
        .filter(interviews::interview_id.eq(interview_id))
        .select(InterviewRow::as_select())
        .first::<InterviewRow>(conn)
        .optional()?
        .map(InterviewRow::into_interview)
        .transpose()
}

/// Lists the interviews booked for one application, soonest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_interviews_for_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<Vec<Interview>, PersistenceError> {
    interviews::table
        .filter(interviews::application_id.eq(application_id))
        .select(InterviewRow::as_select())
        .order((interviews::scheduled_at.asc(), interviews::interview_id.asc()))
        .load::<InterviewRow>(conn)?
        .into_iter()
        .map(InterviewRow::into_interview)
        .collect()
}

/// Lists every interview on the user's applications, soonest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_interviews_for_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<InterviewSummary>, PersistenceError> {
    interviews::table
        .inner_join(
            applications::table
                .inner_join(jobs::table)
                .inner_join(users::table),
        )
        .filter(applications::user_id.eq(user_id))
        .select((
            InterviewRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::user_id,
        ))
        .order((interviews::scheduled_at.asc(), interviews::interview_id.asc()))
        .load::<SummaryTuple>(conn)?
        .into_iter()
        .map(into_summary)
        .collect()
}

/// Lists one page of all interviews, soonest first, with the total.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_interviews(
    conn: &mut SqliteConnection,
    filter: InterviewFilter,
    page: PageRequest,
) -> Result<(Vec<InterviewSummary>, i64), PersistenceError> {
    let mut count_query = interviews::table.into_boxed::<Sqlite>();
    let mut query = interviews::table
        .inner_join(
            applications::table
                .inner_join(jobs::table)
                .inner_join(users::table),
        )
        .into_boxed::<Sqlite>();
    if let Some(status) = filter.status {
        count_query = count_query.filter(interviews::status.eq(status.as_str()));
        query = query.filter(interviews::status.eq(status.as_str()));
    }

    let total: i64 = count_query.count().get_result(conn)?;
    let rows: Vec<SummaryTuple> = query
        .select((
            InterviewRow::as_select(),
            jobs::title,
            users::first_name,
            users::last_name,
            users::user_id,
        ))
        .order((interviews::scheduled_at.asc(), interviews::interview_id.asc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)?;

    debug!(total, returned = rows.len(), "Listed interviews");
    let summaries: Vec<InterviewSummary> = rows
        .into_iter()
        .map(into_summary)
        .collect::<Result<_, _>>()?;
    Ok((summaries, total))
}
