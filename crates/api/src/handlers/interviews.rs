// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview scheduling.

use talent_bridge::{Command, TransitionResult, WorkflowContext};
use talent_bridge_domain::{
    Application, DEFAULT_DURATION_MINUTES, Interview, InterviewStatus, InterviewType, Job,
    PageRequest, Role,
};
use talent_bridge_persistence::{InterviewFilter, InterviewSummary, Persistence};
use tracing::info;

use super::{
    commit, emails_for, load_application, load_interview, load_job, page_request,
    parse_optional_tag, run_command,
};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    HandlerOutcome, InterviewSummaryInfo, InterviewWriteResponse, ListInterviewsRequest,
    ListInterviewsResponse, Page, RescheduleInterviewRequest, ScheduleInterviewRequest,
    UpdateInterviewRequest,
};

/// Interviews per page in the staff list.
pub const INTERVIEWS_PER_PAGE: u32 = 20;

/// Loads the application and job an interview belongs to.
fn interview_context(
    persistence: &mut Persistence,
    interview: Interview,
) -> Result<WorkflowContext, ApiError> {
    let application: Application = load_application(persistence, interview.application_id)?;
    let job: Job = load_job(persistence, application.job_id)?;
    Ok(WorkflowContext::for_interview(interview, application, job))
}

/// Books an interview and moves the application to the interview stage.
///
/// The interview, the status change, and the applicant's in-app
/// notification are committed together. The invitation email is returned
/// for dispatch.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees, before any input is read
/// * `ApiError::ResourceNotFound` if the application does not exist
/// * `ApiError::InvalidInput` for a bad date, time, duration, or type
pub fn schedule_interview(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    application_id: i64,
    request: &ScheduleInterviewRequest,
) -> Result<HandlerOutcome<InterviewWriteResponse>, ApiError> {
    AuthorizationService::authorize_review(actor, "schedule interview")?;

    let application: Application = load_application(persistence, application_id)?;
    let job: Job = load_job(persistence, application.job_id)?;
    let interview_type: InterviewType =
        parse_optional_tag::<InterviewType>(request.interview_type.as_deref())?
            .unwrap_or_default();

    let context: WorkflowContext = WorkflowContext::for_application(application, job);
    let command: Command = Command::ScheduleInterview {
        application_id,
        date: request.scheduled_date.clone(),
        time: request.scheduled_time.clone(),
        duration_minutes: request.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
        interview_type,
        location_or_link: request.location_or_link.clone(),
        interviewer_email: request.interviewer_email.clone(),
        notes: request.notes.clone(),
    };
    let result: TransitionResult = run_command(&context, command, actor)?;
    let interview_id: i64 = commit(persistence, &result)?
        .interview_id
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Interview id missing after scheduling"),
        })?;

    info!(
        interview_id,
        application_id,
        scheduled_by = actor.user_id,
        "Interview scheduled"
    );

    Ok(HandlerOutcome::with_emails(
        InterviewWriteResponse {
            interview_id,
            application_id,
            status: InterviewStatus::Scheduled.as_str().to_string(),
            message: String::from("Interview scheduled successfully!"),
        },
        emails_for(persistence, &result),
    ))
}

/// Lists interviews, soonest first.
///
/// Employees see every interview on their own applications in one page.
/// HR and managers see all interviews, optionally filtered by status.
///
/// # Errors
///
/// * `ApiError::InvalidInput` for an unknown status filter
/// * Any lookup failure
pub fn list_interviews(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &ListInterviewsRequest,
) -> Result<ListInterviewsResponse, ApiError> {
    if actor.role == Role::Employee {
        let interviews: Vec<InterviewSummary> = persistence
            .list_interviews_for_user(actor.user_id)
            .map_err(translate_persistence_error)?;
        return Ok(ListInterviewsResponse {
            interviews: Page::single(interviews.iter().map(InterviewSummaryInfo::from).collect()),
        });
    }

    let filter: InterviewFilter = InterviewFilter {
        status: parse_optional_tag::<InterviewStatus>(request.status.as_deref())?,
    };
    let page: PageRequest = page_request(request.page, INTERVIEWS_PER_PAGE);
    let (interviews, total): (Vec<InterviewSummary>, i64) = persistence
        .list_interviews(filter, page)
        .map_err(translate_persistence_error)?;

    Ok(ListInterviewsResponse {
        interviews: Page::new(
            interviews.iter().map(InterviewSummaryInfo::from).collect(),
            page,
            total,
        ),
    })
}

/// Changes an interview's status or notes. HR and managers only.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees, before any input is read
/// * `ApiError::ResourceNotFound` if the interview does not exist
/// * `ApiError::InvalidInput` for an unknown status
pub fn update_interview(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    interview_id: i64,
    request: &UpdateInterviewRequest,
) -> Result<InterviewWriteResponse, ApiError> {
    AuthorizationService::authorize_review(actor, "update interview")?;

    let status: Option<InterviewStatus> =
        parse_optional_tag::<InterviewStatus>(request.status.as_deref())?;
    let interview: Interview = load_interview(persistence, interview_id)?;
    let application_id: i64 = interview.application_id;
    let current: InterviewStatus = interview.status;
    let context: WorkflowContext = interview_context(persistence, interview)?;

    let command: Command = Command::UpdateInterview {
        interview_id,
        status,
        notes: request.notes.clone(),
    };
    let result: TransitionResult = run_command(&context, command, actor)?;
    commit(persistence, &result)?;

    Ok(InterviewWriteResponse {
        interview_id,
        application_id,
        status: status.unwrap_or(current).as_str().to_string(),
        message: String::from("Interview updated successfully!"),
    })
}

/// Moves an interview to a new date and time and marks it rescheduled.
///
/// The applicant receives a fresh invitation with the new slot.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees, before any input is read
/// * `ApiError::ResourceNotFound` if the interview does not exist
/// * `ApiError::InvalidInput` for a bad date or time
pub fn reschedule_interview(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    interview_id: i64,
    request: &RescheduleInterviewRequest,
) -> Result<HandlerOutcome<InterviewWriteResponse>, ApiError> {
    AuthorizationService::authorize_review(actor, "reschedule interview")?;

    let interview: Interview = load_interview(persistence, interview_id)?;
    let application_id: i64 = interview.application_id;
    let context: WorkflowContext = interview_context(persistence, interview)?;

    let command: Command = Command::RescheduleInterview {
        interview_id,
        date: request.scheduled_date.clone(),
        time: request.scheduled_time.clone(),
    };
    let result: TransitionResult = run_command(&context, command, actor)?;
    commit(persistence, &result)?;

    info!(interview_id, rescheduled_by = actor.user_id, "Interview rescheduled");

    Ok(HandlerOutcome::with_emails(
        InterviewWriteResponse {
            interview_id,
            application_id,
            status: InterviewStatus::Rescheduled.as_str().to_string(),
            message: String::from("Interview rescheduled successfully!"),
        },
        emails_for(persistence, &result),
    ))
}
