// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job posting mutations, including the explicit delete cascade.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use talent_bridge_domain::{JobDraft, format_date};
use tracing::info;

use crate::backend::get_last_insert_rowid;
use crate::data_models::CascadeDeleteSummary;
use crate::diesel_schema::{applications, interviews, jobs};
use crate::error::PersistenceError;

/// Inserts a job posted by `posted_by`.
///
/// # Errors
///
/// Returns an error if the poster does not exist or the insert fails.
pub fn create_job(
    conn: &mut SqliteConnection,
    draft: &JobDraft,
    posted_by: i64,
) -> Result<i64, PersistenceError> {
    let deadline: Option<String> = draft.deadline.map(format_date);

    diesel::insert_into(jobs::table)
        .values((
            jobs::title.eq(draft.title.trim()),
            jobs::department.eq(draft.department.trim()),
            jobs::location.eq(draft.location.trim()),
            jobs::description.eq(draft.description.trim()),
            jobs::requirements.eq(draft.requirements.as_deref()),
            jobs::skills_required.eq(draft.skills_required.as_deref()),
            jobs::salary_range.eq(draft.salary_range.as_deref()),
            jobs::job_type.eq(draft.job_type.trim()),
            jobs::status.eq(draft.status.as_str()),
            jobs::deadline.eq(deadline.as_deref()),
            jobs::posted_by.eq(posted_by),
        ))
        .execute(conn)?;

    let job_id: i64 = get_last_insert_rowid(conn)?;
    info!(job_id, posted_by, title = %draft.title, "Job posted");
    Ok(job_id)
}

/// Overwrites every editable field of a job.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the job does not exist.
pub fn update_job(
    conn: &mut SqliteConnection,
    job_id: i64,
    draft: &JobDraft,
) -> Result<(), PersistenceError> {
    let deadline: Option<String> = draft.deadline.map(format_date);

    let rows: usize = diesel::update(jobs::table)
        .filter(jobs::job_id.eq(job_id))
        .set((
            jobs::title.eq(draft.title.trim()),
            jobs::department.eq(draft.department.trim()),
            jobs::location.eq(draft.location.trim()),
            jobs::description.eq(draft.description.trim()),
            jobs::requirements.eq(draft.requirements.as_deref()),
            jobs::skills_required.eq(draft.skills_required.as_deref()),
            jobs::salary_range.eq(draft.salary_range.as_deref()),
            jobs::job_type.eq(draft.job_type.trim()),
            jobs::status.eq(draft.status.as_str()),
            jobs::deadline.eq(deadline.as_deref()),
            jobs::updated_at.eq(diesel::dsl::sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job with ID {job_id} not found"
        )));
    }
    info!(job_id, "Job updated");
    Ok(())
}

/// Deletes a job together with its applications and their interviews.
///
/// Runs in one transaction, removing interviews, then applications, then
/// the job. Rows belonging to other jobs are untouched.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the job does not exist; nothing
/// is removed in that case.
pub fn delete_job_cascade(
    conn: &mut SqliteConnection,
    job_id: i64,
) -> Result<CascadeDeleteSummary, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let application_ids: Vec<i64> = applications::table
            .filter(applications::job_id.eq(job_id))
            .select(applications::application_id)
            .load(conn)?;

        let interviews_removed: usize = diesel::delete(
            interviews::table.filter(interviews::application_id.eq_any(application_ids)),
        )
        .execute(conn)?;

        let applications_removed: usize =
            diesel::delete(applications::table.filter(applications::job_id.eq(job_id)))
                .execute(conn)?;

        let jobs_removed: usize =
            diesel::delete(jobs::table.filter(jobs::job_id.eq(job_id))).execute(conn)?;

        if jobs_removed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Job with ID {job_id} not found"
            )));
        }

        info!(
            job_id,
            applications_removed, interviews_removed, "Job deleted with dependents"
        );
        Ok(CascadeDeleteSummary {
            job_id,
            applications_removed,
            interviews_removed,
        })
    })
}
