// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commits workflow transitions.
//!
//! The store effect and the in-app notification for one transition are
//! written in a single transaction; a failure at any step rolls back both.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use talent_bridge::{Effect, NotificationIntent, TransitionResult};
use talent_bridge_domain::{
    ApplicationStatus, InterviewStatus, NewApplication, NewInterview, format_schedule_for_storage,
};
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::data_models::PersistTransitionResult;
use crate::diesel_schema::{applications, interviews, notifications};
use crate::error::PersistenceError;

#[derive(AsChangeset)]
#[diesel(table_name = interviews)]
struct InterviewChanges<'a> {
    status: Option<&'a str>,
    notes: Option<&'a str>,
}

fn now() -> diesel::expression::SqlLiteral<Text> {
    diesel::dsl::sql::<Text>("CURRENT_TIMESTAMP")
}

fn ensure_updated(rows: usize, entity: &str, id: i64) -> Result<(), PersistenceError> {
    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "{entity} with ID {id} not found"
        )));
    }
    Ok(())
}

fn insert_application(
    conn: &mut SqliteConnection,
    application: &NewApplication,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(applications::table)
        .values((
            applications::job_id.eq(application.job_id),
            applications::user_id.eq(application.user_id),
            applications::cover_letter.eq(application.cover_letter.as_deref()),
            applications::resume_filename.eq(application.resume_filename.as_deref()),
            applications::status.eq(ApplicationStatus::Submitted.as_str()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

fn set_application_status(
    conn: &mut SqliteConnection,
    application_id: i64,
    status: ApplicationStatus,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(applications::table)
        .filter(applications::application_id.eq(application_id))
        .set((
            applications::status.eq(status.as_str()),
            applications::updated_at.eq(now()),
        ))
        .execute(conn)?;
    ensure_updated(rows, "Application", application_id)
}

fn insert_interview(
    conn: &mut SqliteConnection,
    interview: &NewInterview,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(interviews::table)
        .values((
            interviews::application_id.eq(interview.application_id),
            interviews::scheduled_at.eq(format_schedule_for_storage(interview.scheduled_at)),
            interviews::duration_minutes.eq(interview.duration_minutes),
            interviews::interview_type.eq(interview.interview_type.as_str()),
            interviews::location_or_link.eq(interview.location_or_link.as_deref()),
            interviews::interviewer_email.eq(interview.interviewer_email.as_deref()),
            interviews::notes.eq(interview.notes.as_deref()),
            interviews::status.eq(InterviewStatus::Scheduled.as_str()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

fn insert_notification(
    conn: &mut SqliteConnection,
    intent: &NotificationIntent,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(notifications::table)
        .values((
            notifications::user_id.eq(intent.recipient_user_id()),
            notifications::title.eq(intent.title()),
            notifications::message.eq(intent.message()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

fn apply_effect(
    conn: &mut SqliteConnection,
    effect: &Effect,
    outcome: &mut PersistTransitionResult,
) -> Result<(), PersistenceError> {
    match effect {
        Effect::CreateApplication(application) => {
            let application_id: i64 = insert_application(conn, application)?;
            info!(
                application_id,
                job_id = application.job_id,
                user_id = application.user_id,
                "Application submitted"
            );
            outcome.application_id = Some(application_id);
        }
        Effect::ReviewApplication {
            application_id,
            status,
            hr_notes,
        } => {
            let rows: usize = diesel::update(applications::table)
                .filter(applications::application_id.eq(*application_id))
                .set((
                    applications::status.eq(status.as_str()),
                    applications::hr_notes.eq(hr_notes.as_deref()),
                    applications::updated_at.eq(now()),
                ))
                .execute(conn)?;
            ensure_updated(rows, "Application", *application_id)?;
            info!(application_id, status = status.as_str(), "Application reviewed");
        }
        Effect::SetApplicationStatus {
            application_id,
            status,
        } => {
            set_application_status(conn, *application_id, *status)?;
            info!(application_id, status = status.as_str(), "Application status set");
        }
        Effect::ScheduleInterview(interview) => {
            let interview_id: i64 = insert_interview(conn, interview)?;
            set_application_status(conn, interview.application_id, ApplicationStatus::Interview)?;
            info!(
                interview_id,
                application_id = interview.application_id,
                "Interview scheduled"
            );
            outcome.interview_id = Some(interview_id);
        }
        Effect::UpdateInterview {
            interview_id,
            status,
            notes,
        } => {
            let changes: InterviewChanges<'_> = InterviewChanges {
                status: status.as_ref().map(InterviewStatus::as_str),
                notes: notes.as_deref(),
            };
            let rows: usize = diesel::update(interviews::table)
                .filter(interviews::interview_id.eq(*interview_id))
                .set((changes, interviews::updated_at.eq(now())))
                .execute(conn)?;
            ensure_updated(rows, "Interview", *interview_id)?;
            info!(interview_id, "Interview updated");
        }
        Effect::RescheduleInterview {
            interview_id,
            scheduled_at,
        } => {
            let rows: usize = diesel::update(interviews::table)
                .filter(interviews::interview_id.eq(*interview_id))
                .set((
                    interviews::scheduled_at.eq(format_schedule_for_storage(*scheduled_at)),
                    interviews::status.eq(InterviewStatus::Rescheduled.as_str()),
                    interviews::updated_at.eq(now()),
                ))
                .execute(conn)?;
            ensure_updated(rows, "Interview", *interview_id)?;
            info!(interview_id, "Interview rescheduled");
        }
    }
    Ok(())
}

/// Commits a transition result: the store effect, then the in-app
/// notification if the result carries one.
///
/// # Errors
///
/// Returns an error if any write fails; nothing is committed in that case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<PersistTransitionResult, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut outcome: PersistTransitionResult = PersistTransitionResult::default();
        apply_effect(conn, &result.effect, &mut outcome)?;

        if let Some(intent) = &result.notification {
            let notification_id: i64 = insert_notification(conn, intent)?;
            debug!(
                notification_id,
                user_id = intent.recipient_user_id(),
                "In-app notification written"
            );
            outcome.notification_id = Some(notification_id);
        }

        Ok(outcome)
    })
}
