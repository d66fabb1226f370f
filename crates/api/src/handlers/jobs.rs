// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job board, postings, and dashboards.

use talent_bridge_domain::{
    DEFAULT_JOB_TYPE, Job, JobDraft, JobStatus, PageRequest, Role, optional_text,
    parse_optional_date, require_text, validate_job_draft,
};
use talent_bridge_persistence::{CascadeDeleteSummary, JobFilter, Persistence};
use tracing::info;

use super::{load_job, page_request, parse_optional_tag};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ApplicationInfo, ApplicationSummaryInfo, DeleteJobResponse, EmployeeDashboardResponse,
    HrDashboardResponse, JobDetailResponse, JobInfo, JobRequest, JobWriteResponse,
    ListJobsRequest, ListJobsResponse, Page,
};

/// Active jobs per page on the job board.
pub const JOBS_PER_PAGE: u32 = 10;
/// Jobs and applications shown on the employee dashboard.
pub const EMPLOYEE_DASHBOARD_LIMIT: i64 = 5;
/// Applications shown on the HR dashboard.
pub const HR_DASHBOARD_LIMIT: i64 = 10;

fn job_draft(request: &JobRequest, default_status: JobStatus) -> Result<JobDraft, ApiError> {
    let status: JobStatus =
        parse_optional_tag::<JobStatus>(request.status.as_deref())?.unwrap_or(default_status);
    let draft: JobDraft = JobDraft {
        title: require_text("title", &request.title).map_err(translate_domain_error)?,
        department: require_text("department", &request.department)
            .map_err(translate_domain_error)?,
        location: require_text("location", &request.location).map_err(translate_domain_error)?,
        description: require_text("description", &request.description)
            .map_err(translate_domain_error)?,
        requirements: optional_text(request.requirements.as_deref()),
        skills_required: optional_text(request.skills_required.as_deref()),
        salary_range: optional_text(request.salary_range.as_deref()),
        job_type: optional_text(request.job_type.as_deref())
            .unwrap_or_else(|| String::from(DEFAULT_JOB_TYPE)),
        status,
        deadline: parse_optional_date("deadline", request.deadline.as_deref())
            .map_err(translate_domain_error)?,
    };
    validate_job_draft(&draft).map_err(translate_domain_error)?;
    Ok(draft)
}

/// Lists active jobs matching the filters, newest first.
///
/// Department and location match any part of the stored value; search
/// matches title, description, and required skills. Matching ignores ASCII
/// case.
///
/// # Errors
///
/// Returns an error if the lookup fails.
pub fn list_jobs(
    persistence: &mut Persistence,
    request: &ListJobsRequest,
) -> Result<ListJobsResponse, ApiError> {
    let filter: JobFilter = JobFilter {
        department: optional_text(request.department.as_deref()),
        location: optional_text(request.location.as_deref()),
        search: optional_text(request.search.as_deref()),
    };
    let page: PageRequest = page_request(request.page, JOBS_PER_PAGE);

    let (jobs, total): (Vec<Job>, i64) = persistence
        .list_active_jobs(&filter, page)
        .map_err(translate_persistence_error)?;
    let (departments, locations): (Vec<String>, Vec<String>) = persistence
        .job_filter_options()
        .map_err(translate_persistence_error)?;

    Ok(ListJobsResponse {
        jobs: Page::new(jobs.iter().map(JobInfo::from).collect(), page, total),
        departments,
        locations,
    })
}

/// Returns a job. Employees also receive their own application to it.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the job does not exist.
pub fn job_detail(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    job_id: i64,
) -> Result<JobDetailResponse, ApiError> {
    let job: Job = load_job(persistence, job_id)?;

    let existing_application: Option<ApplicationInfo> = if actor.role == Role::Employee {
        persistence
            .find_application(job_id, actor.user_id)
            .map_err(translate_persistence_error)?
            .as_ref()
            .map(ApplicationInfo::from)
    } else {
        None
    };

    Ok(JobDetailResponse {
        job: JobInfo::from(&job),
        existing_application,
    })
}

/// Posts a job. HR and managers only.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees
/// * `ApiError::InvalidInput` for a blank required field or bad deadline
pub fn post_job(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &JobRequest,
) -> Result<JobWriteResponse, ApiError> {
    AuthorizationService::authorize_post_job(actor)?;
    let draft: JobDraft = job_draft(request, JobStatus::Active)?;

    let job_id: i64 = persistence
        .create_job(&draft, actor.user_id)
        .map_err(translate_persistence_error)?;

    info!(job_id, posted_by = actor.user_id, title = %draft.title, "Job posted");

    Ok(JobWriteResponse {
        job_id,
        message: String::from("Job posted successfully!"),
    })
}

/// Overwrites a job. HR, managers, and the poster only.
///
/// An absent status keeps the current one; an absent deadline clears it.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the job does not exist
/// * `ApiError::Forbidden` if the actor may not manage the job
/// * `ApiError::InvalidInput` for a blank required field or bad deadline
pub fn edit_job(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    job_id: i64,
    request: &JobRequest,
) -> Result<JobWriteResponse, ApiError> {
    let job: Job = load_job(persistence, job_id)?;
    AuthorizationService::authorize_manage_job(actor, &job, "edit job")?;
    let draft: JobDraft = job_draft(request, job.status)?;

    persistence
        .update_job(job_id, &draft)
        .map_err(translate_persistence_error)?;

    info!(job_id, user_id = actor.user_id, "Job updated");

    Ok(JobWriteResponse {
        job_id,
        message: String::from("Job updated successfully!"),
    })
}

/// Deletes a job with its applications and their interviews.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the job does not exist
/// * `ApiError::Forbidden` if the actor may not manage the job
pub fn delete_job(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    job_id: i64,
) -> Result<DeleteJobResponse, ApiError> {
    let job: Job = load_job(persistence, job_id)?;
    AuthorizationService::authorize_manage_job(actor, &job, "delete job")?;

    let summary: CascadeDeleteSummary = persistence
        .delete_job(job_id)
        .map_err(translate_persistence_error)?;

    Ok(DeleteJobResponse {
        job_id,
        applications_removed: summary.applications_removed,
        interviews_removed: summary.interviews_removed,
        message: String::from("Job deleted successfully!"),
    })
}

/// Latest active jobs, the caller's latest applications, and their unread
/// notification count.
///
/// # Errors
///
/// Returns an error if a lookup fails.
pub fn employee_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<EmployeeDashboardResponse, ApiError> {
    let recent_jobs: Vec<JobInfo> = persistence
        .recent_active_jobs(EMPLOYEE_DASHBOARD_LIMIT)
        .map_err(translate_persistence_error)?
        .iter()
        .map(JobInfo::from)
        .collect();
    let my_applications: Vec<ApplicationSummaryInfo> = persistence
        .recent_applications_for_user(actor.user_id, EMPLOYEE_DASHBOARD_LIMIT)
        .map_err(translate_persistence_error)?
        .iter()
        .map(ApplicationSummaryInfo::from)
        .collect();
    let unread_notifications: i64 = persistence
        .count_unread_notifications(actor.user_id)
        .map_err(translate_persistence_error)?;

    Ok(EmployeeDashboardResponse {
        recent_jobs,
        my_applications,
        unread_notifications,
    })
}

/// Board-wide counters and the latest applications. HR and managers only.
///
/// # Errors
///
/// * `ApiError::Forbidden` for employees
/// * Any lookup failure
pub fn hr_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<HrDashboardResponse, ApiError> {
    AuthorizationService::authorize_review(actor, "view HR dashboard")?;

    let counts = persistence
        .dashboard_counts()
        .map_err(translate_persistence_error)?;
    let recent_applications: Vec<ApplicationSummaryInfo> = persistence
        .recent_applications(HR_DASHBOARD_LIMIT)
        .map_err(translate_persistence_error)?
        .iter()
        .map(ApplicationSummaryInfo::from)
        .collect();

    Ok(HrDashboardResponse {
        stats: counts.into(),
        recent_applications,
    })
}
