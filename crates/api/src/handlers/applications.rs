// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submitting, reviewing, and withdrawing applications.

use talent_bridge::{Command, TransitionResult, WorkflowContext};
use talent_bridge_domain::{Application, ApplicationStatus, Interview, Job, PageRequest, User};
use talent_bridge_persistence::{
    ApplicationFilter, ApplicationSummary, PersistTransitionResult, Persistence,
};
use tracing::info;

use super::{
    commit, emails_for, load_application, load_job, load_user, page_request, parse_optional_tag,
    run_command,
};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ApplicationDetailResponse, ApplicationInfo, ApplicationSummaryInfo, ApplicationWriteResponse,
    HandlerOutcome, InterviewInfo, JobInfo, JobOption, ManageApplicationsRequest,
    ManageApplicationsResponse, Page, SubmitApplicationRequest, UpdateApplicationStatusRequest,
    UserInfo,
};
use crate::uploads::{ResumeStore, ResumeUpload};

/// Own applications per page.
pub const MY_APPLICATIONS_PER_PAGE: u32 = 10;
/// Applications per page in the review list.
pub const REVIEW_PER_PAGE: u32 = 20;

/// Applies to a job, optionally with a resume.
///
/// The duplicate check and the resume's extension are validated before the
/// file is written. The file is written before the application is committed;
/// if the commit fails the file is removed again.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the job does not exist
/// * `ApiError::Conflict` if the actor already applied
/// * `ApiError::InvalidInput` for a disallowed or oversized resume
/// * `ApiError::StoreFailure` if the commit fails
pub fn submit_application(
    persistence: &mut Persistence,
    store: &ResumeStore,
    actor: &AuthenticatedActor,
    job_id: i64,
    request: &SubmitApplicationRequest,
    resume: Option<&ResumeUpload>,
) -> Result<ApplicationWriteResponse, ApiError> {
    let job: Job = load_job(persistence, job_id)?;
    let existing: Option<Application> = persistence
        .find_application(job_id, actor.user_id)
        .map_err(translate_persistence_error)?;

    let context: WorkflowContext = WorkflowContext::for_submission(job, existing);
    let command: Command = Command::SubmitApplication {
        job_id,
        cover_letter: request.cover_letter.clone(),
        resume_filename: resume.map(|r| r.filename.clone()),
    };
    let mut result: TransitionResult = run_command(&context, command, actor)?;

    let stored_resume: Option<String> = match resume {
        Some(upload) => {
            let stored: String = store.save(upload)?;
            result = result.with_stored_resume(stored.clone());
            Some(stored)
        }
        None => None,
    };

    let outcome: PersistTransitionResult = match commit(persistence, &result) {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(stored) = stored_resume.as_deref() {
                store.discard(stored);
            }
            return Err(e);
        }
    };
    let application_id: i64 = outcome.application_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Application id missing after submit"),
    })?;

    Ok(ApplicationWriteResponse {
        application_id,
        status: ApplicationStatus::Submitted.as_str().to_string(),
        message: String::from("Application submitted successfully!"),
    })
}

/// Lists the caller's applications, newest first.
///
/// # Errors
///
/// Returns an error if the lookup fails.
pub fn my_applications(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    page: Option<u32>,
) -> Result<Page<ApplicationSummaryInfo>, ApiError> {
    let page: PageRequest = page_request(page, MY_APPLICATIONS_PER_PAGE);
    let (applications, total): (Vec<ApplicationSummary>, i64) = persistence
        .list_applications_for_user(actor.user_id, page)
        .map_err(translate_persistence_error)?;

    Ok(Page::new(
        applications.iter().map(ApplicationSummaryInfo::from).collect(),
        page,
        total,
    ))
}

/// Lists applications for review, with the job list for the filter
/// dropdown. HR and managers only.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees
/// * `ApiError::InvalidInput` for an unknown status filter
pub fn manage_applications(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &ManageApplicationsRequest,
) -> Result<ManageApplicationsResponse, ApiError> {
    AuthorizationService::authorize_review(actor, "manage applications")?;

    let filter: ApplicationFilter = ApplicationFilter {
        status: parse_optional_tag::<ApplicationStatus>(request.status.as_deref())?,
        job_id: request.job_id,
    };
    let page: PageRequest = page_request(request.page, REVIEW_PER_PAGE);

    let (applications, total): (Vec<ApplicationSummary>, i64) = persistence
        .list_applications(filter, page)
        .map_err(translate_persistence_error)?;
    let jobs: Vec<JobOption> = persistence
        .list_jobs_by_title()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|job| JobOption {
            job_id: job.job_id,
            title: job.title,
        })
        .collect();

    Ok(ManageApplicationsResponse {
        applications: Page::new(
            applications.iter().map(ApplicationSummaryInfo::from).collect(),
            page,
            total,
        ),
        jobs,
    })
}

/// Returns an application with its job, applicant, and interviews.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the application does not exist
/// * `ApiError::Forbidden` unless the actor is the applicant or staff
pub fn application_detail(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    application_id: i64,
) -> Result<ApplicationDetailResponse, ApiError> {
    let application: Application = load_application(persistence, application_id)?;
    AuthorizationService::authorize_view_application(actor, &application)?;

    let job: Job = load_job(persistence, application.job_id)?;
    let applicant: User = load_user(persistence, application.user_id)?;
    let interviews: Vec<Interview> = persistence
        .list_interviews_for_application(application_id)
        .map_err(translate_persistence_error)?;

    Ok(ApplicationDetailResponse {
        application: ApplicationInfo::from(&application),
        job: JobInfo::from(&job),
        applicant: UserInfo::from(&applicant),
        interviews: interviews.iter().map(InterviewInfo::from).collect(),
    })
}

/// Sets an application's status and reviewer notes. HR and managers only.
///
/// When the status changes the applicant gets an in-app notification and
/// one email, returned in the outcome for dispatch.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees, before any input is read
/// * `ApiError::ResourceNotFound` if the application does not exist
/// * `ApiError::InvalidInput` for an unknown status
pub fn update_application_status(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    application_id: i64,
    request: &UpdateApplicationStatusRequest,
) -> Result<HandlerOutcome<ApplicationWriteResponse>, ApiError> {
    AuthorizationService::authorize_review(actor, "update application status")?;

    let application: Application = load_application(persistence, application_id)?;
    let job: Job = load_job(persistence, application.job_id)?;
    let status: ApplicationStatus = request
        .status
        .trim()
        .parse::<ApplicationStatus>()
        .map_err(translate_domain_error)?;

    let context: WorkflowContext = WorkflowContext::for_application(application, job);
    let command: Command = Command::UpdateApplicationStatus {
        application_id,
        status,
        hr_notes: request.hr_notes.clone(),
    };
    let result: TransitionResult = run_command(&context, command, actor)?;
    commit(persistence, &result)?;

    info!(
        application_id,
        status = status.as_str(),
        reviewer = actor.user_id,
        notified = result.notification.is_some(),
        "Application status updated"
    );

    Ok(HandlerOutcome::with_emails(
        ApplicationWriteResponse {
            application_id,
            status: status.as_str().to_string(),
            message: String::from("Application status updated successfully!"),
        },
        emails_for(persistence, &result),
    ))
}

/// Withdraws the caller's own application.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the application does not exist
/// * `ApiError::Forbidden` unless the actor is the applicant
/// * `ApiError::InvalidState` if the application is at offer or rejected
pub fn withdraw_application(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    application_id: i64,
) -> Result<ApplicationWriteResponse, ApiError> {
    let application: Application = load_application(persistence, application_id)?;
    let job: Job = load_job(persistence, application.job_id)?;

    let context: WorkflowContext = WorkflowContext::for_application(application, job);
    let result: TransitionResult = run_command(
        &context,
        Command::WithdrawApplication { application_id },
        actor,
    )?;
    commit(persistence, &result)?;

    Ok(ApplicationWriteResponse {
        application_id,
        status: ApplicationStatus::Withdrawn.as_str().to_string(),
        message: String::from("Application withdrawn successfully"),
    })
}
