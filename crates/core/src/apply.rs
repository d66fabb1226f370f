// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::policy::{require_owner, require_staff};
use crate::state::{Effect, NotificationIntent, TransitionResult, WorkflowContext};
use talent_bridge_domain::{
    Actor, Application, ApplicationStatus, Interview, InterviewType, Job, NewApplication,
    NewInterview, optional_text, parse_schedule, validate_duration, validate_resume_filename,
};
use time::PrimitiveDateTime;

fn loaded_job(context: &WorkflowContext) -> Result<&Job, CoreError> {
    context
        .job
        .as_ref()
        .ok_or_else(|| CoreError::Internal(String::from("job not loaded")))
}

fn loaded_application(context: &WorkflowContext) -> Result<&Application, CoreError> {
    context
        .application
        .as_ref()
        .ok_or_else(|| CoreError::Internal(String::from("application not loaded")))
}

fn loaded_interview(context: &WorkflowContext) -> Result<&Interview, CoreError> {
    context
        .interview
        .as_ref()
        .ok_or_else(|| CoreError::Internal(String::from("interview not loaded")))
}

fn invitation(
    application: &Application,
    job: &Job,
    interview_type: InterviewType,
    location_or_link: Option<String>,
    scheduled_at: PrimitiveDateTime,
) -> NotificationIntent {
    NotificationIntent::InterviewInvitation {
        recipient_user_id: application.user_id,
        job_title: job.title.clone(),
        scheduled_at,
        interview_type,
        location_or_link,
    }
}

/// Applies a command to the loaded records, producing the store effect and
/// notification it requires.
///
/// This function performs no I/O. Permission is checked before any state
/// rule, so a forbidden actor never learns about the record's status.
///
/// # Arguments
///
/// * `context` - The records the command refers to
/// * `command` - The command to apply
/// * `actor` - The identity performing the command
///
/// # Errors
///
/// * `CoreError::Forbidden` if the actor lacks the role or ownership
/// * `CoreError::Conflict` if the actor already applied to the job
/// * `CoreError::InvalidState` if a withdrawal is blocked by the status
/// * `CoreError::DomainViolation` for malformed input
/// * `CoreError::Internal` if the context lacks a record the command needs
#[allow(clippy::too_many_lines)]
pub fn apply(
    context: &WorkflowContext,
    command: Command,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SubmitApplication {
            job_id,
            cover_letter,
            resume_filename,
        } => {
            let job: &Job = loaded_job(context)?;
            if job.job_id != job_id {
                return Err(CoreError::Internal(format!(
                    "loaded job {} does not match requested job {job_id}",
                    job.job_id
                )));
            }

            // Duplicate check precedes any look at the upload
            if context
                .existing_application
                .as_ref()
                .is_some_and(|existing| existing.user_id == actor.user_id)
            {
                return Err(CoreError::Conflict(String::from(
                    "You have already applied for this job.",
                )));
            }

            if let Some(name) = resume_filename.as_deref() {
                validate_resume_filename(name)?;
            }

            Ok(TransitionResult::silent(Effect::CreateApplication(
                NewApplication {
                    job_id,
                    user_id: actor.user_id,
                    cover_letter: optional_text(cover_letter.as_deref()),
                    resume_filename,
                },
            )))
        }
        Command::UpdateApplicationStatus {
            application_id,
            status,
            hr_notes,
        } => {
            require_staff(actor, "update application status")?;
            let application: &Application = loaded_application(context)?;
            let job: &Job = loaded_job(context)?;

            let effect: Effect = Effect::ReviewApplication {
                application_id,
                status,
                hr_notes: optional_text(hr_notes.as_deref()),
            };

            if application.status == status {
                return Ok(TransitionResult::silent(effect));
            }

            Ok(TransitionResult::notifying(
                effect,
                NotificationIntent::StatusUpdate {
                    recipient_user_id: application.user_id,
                    job_title: job.title.clone(),
                    status,
                },
            ))
        }
        Command::WithdrawApplication { application_id } => {
            let application: &Application = loaded_application(context)?;
            require_owner(actor, application.user_id, "withdraw application")?;

            if !application.status.allows_withdrawal() {
                return Err(CoreError::InvalidState {
                    action: "withdraw",
                    status: application.status,
                });
            }

            Ok(TransitionResult::silent(Effect::SetApplicationStatus {
                application_id,
                status: ApplicationStatus::Withdrawn,
            }))
        }
        Command::ScheduleInterview {
            application_id,
            date,
            time,
            duration_minutes,
            interview_type,
            location_or_link,
            interviewer_email,
            notes,
        } => {
            require_staff(actor, "schedule interview")?;
            let application: &Application = loaded_application(context)?;
            let job: &Job = loaded_job(context)?;

            let scheduled_at: PrimitiveDateTime = parse_schedule(&date, &time)?;
            let duration_minutes: i32 = validate_duration(duration_minutes)?;
            let location_or_link: Option<String> = optional_text(location_or_link.as_deref());

            let intent: NotificationIntent = invitation(
                application,
                job,
                interview_type,
                location_or_link.clone(),
                scheduled_at,
            );

            Ok(TransitionResult::notifying(
                Effect::ScheduleInterview(NewInterview {
                    application_id,
                    scheduled_at,
                    duration_minutes,
                    interview_type,
                    location_or_link,
                    interviewer_email: optional_text(interviewer_email.as_deref()),
                    notes: optional_text(notes.as_deref()),
                }),
                intent,
            ))
        }
        Command::UpdateInterview {
            interview_id,
            status,
            notes,
        } => {
            require_staff(actor, "update interview")?;
            loaded_interview(context)?;

            Ok(TransitionResult::silent(Effect::UpdateInterview {
                interview_id,
                status,
                notes: notes.map(|n| n.trim().to_string()),
            }))
        }
        Command::RescheduleInterview {
            interview_id,
            date,
            time,
        } => {
            require_staff(actor, "reschedule interview")?;
            let interview: &Interview = loaded_interview(context)?;
            let application: &Application = loaded_application(context)?;
            let job: &Job = loaded_job(context)?;

            let scheduled_at: PrimitiveDateTime = parse_schedule(&date, &time)?;

            Ok(TransitionResult::notifying(
                Effect::RescheduleInterview {
                    interview_id,
                    scheduled_at,
                },
                invitation(
                    application,
                    job,
                    interview.interview_type,
                    interview.location_or_link.clone(),
                    scheduled_at,
                ),
            ))
        }
    }
}
