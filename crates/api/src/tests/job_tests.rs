// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the job board, postings, and dashboards.

use talent_bridge_domain::{JobStatus, Role};
use talent_bridge_persistence::Persistence;

use crate::ApiError;
use crate::auth::AuthenticatedActor;
use crate::handlers::applications::update_application_status;
use crate::handlers::interviews::schedule_interview;
use crate::handlers::jobs::{
    delete_job, edit_job, employee_dashboard, hr_dashboard, job_detail, list_jobs, post_job,
};
use crate::request_response::{JobRequest, ListJobsRequest, UpdateApplicationStatusRequest};
use crate::tests::helpers::{
    apply_to_job, cleanup_store, create_job_request, create_schedule_request, create_test_actor,
    create_test_persistence, create_test_store, post_test_job,
};
use crate::uploads::ResumeStore;

#[test]
fn test_employee_cannot_post_job() {
    let mut persistence: Persistence = create_test_persistence();
    let employee: AuthenticatedActor =
        create_test_actor(&mut persistence, "alice", Role::Employee);

    let err = post_job(&mut persistence, &employee, &create_job_request("Engineer")).unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn test_post_job_applies_defaults() {
    let mut persistence: Persistence = create_test_persistence();
    let manager: AuthenticatedActor = create_test_actor(&mut persistence, "mgr", Role::Manager);

    let job_id: i64 = post_test_job(&mut persistence, &manager, "Engineer");

    let job = persistence.get_job(job_id).unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.job_type, "Full-time");
    assert_eq!(job.posted_by, manager.user_id);
    assert!(job.deadline.is_none());
}

#[test]
fn test_post_job_rejects_blank_title_and_bad_deadline() {
    let mut persistence: Persistence = create_test_persistence();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);

    let mut blank: JobRequest = create_job_request("Engineer");
    blank.title = String::from("   ");
    let err = post_job(&mut persistence, &hr, &blank).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "title"));

    let mut bad_deadline: JobRequest = create_job_request("Engineer");
    bad_deadline.deadline = Some(String::from("31/12/2030"));
    let err = post_job(&mut persistence, &hr, &bad_deadline).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "deadline"));
}

#[test]
fn test_list_jobs_filters_and_reports_options() {
    let mut persistence: Persistence = create_test_persistence();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    post_test_job(&mut persistence, &hr, "Backend Engineer");
    let mut sales: JobRequest = create_job_request("Account Executive");
    sales.department = String::from("Sales");
    sales.location = String::from("London");
    post_job(&mut persistence, &hr, &sales).unwrap();
    let mut draft: JobRequest = create_job_request("Hidden Role");
    draft.status = Some(String::from("draft"));
    post_job(&mut persistence, &hr, &draft).unwrap();

    let all = list_jobs(&mut persistence, &ListJobsRequest::default()).unwrap();
    assert_eq!(all.jobs.total, 2);
    assert_eq!(all.jobs.items[0].title, "Account Executive");
    assert!(all.departments.contains(&String::from("Sales")));
    assert!(all.locations.contains(&String::from("London")));

    let request: ListJobsRequest = ListJobsRequest {
        department: Some(String::from("sal")),
        ..ListJobsRequest::default()
    };
    let filtered = list_jobs(&mut persistence, &request).unwrap();
    assert_eq!(filtered.jobs.items.len(), 1);
    assert_eq!(filtered.jobs.items[0].department, "Sales");

    let search: ListJobsRequest = ListJobsRequest {
        search: Some(String::from("backend")),
        ..ListJobsRequest::default()
    };
    let searched = list_jobs(&mut persistence, &search).unwrap();
    assert_eq!(searched.jobs.items.len(), 1);
    assert_eq!(searched.jobs.items[0].title, "Backend Engineer");
}

#[test]
fn test_list_jobs_pages_by_ten() {
    let mut persistence: Persistence = create_test_persistence();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    for i in 0..12 {
        post_test_job(&mut persistence, &hr, &format!("Role {i}"));
    }

    let second = list_jobs(
        &mut persistence,
        &ListJobsRequest {
            page: Some(2),
            ..ListJobsRequest::default()
        },
    )
    .unwrap();

    assert_eq!(second.jobs.total, 12);
    assert_eq!(second.jobs.total_pages, 2);
    assert_eq!(second.jobs.page, 2);
    assert_eq!(second.jobs.items.len(), 2);
}

#[test]
fn test_job_detail_includes_employee_application_only() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let alice: AuthenticatedActor = create_test_actor(&mut persistence, "alice", Role::Employee);
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Engineer");
    let application_id: i64 = apply_to_job(&mut persistence, &store, &alice, job_id);

    let for_alice = job_detail(&mut persistence, &alice, job_id).unwrap();
    let for_hr = job_detail(&mut persistence, &hr, job_id).unwrap();

    assert_eq!(
        for_alice.existing_application.unwrap().application_id,
        application_id
    );
    assert!(for_hr.existing_application.is_none());
    assert!(matches!(
        job_detail(&mut persistence, &alice, 999).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
    cleanup_store(&store);
}

#[test]
fn test_edit_job_keeps_status_when_absent() {
    let mut persistence: Persistence = create_test_persistence();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let mut closed: JobRequest = create_job_request("Engineer");
    closed.status = Some(String::from("closed"));
    let job_id: i64 = post_job(&mut persistence, &hr, &closed).unwrap().job_id;

    let mut edit: JobRequest = create_job_request("Senior Engineer");
    edit.deadline = Some(String::from("2030-12-31"));
    edit_job(&mut persistence, &hr, job_id, &edit).unwrap();

    let job = persistence.get_job(job_id).unwrap().unwrap();
    assert_eq!(job.title, "Senior Engineer");
    assert_eq!(job.status, JobStatus::Closed);
    assert!(job.deadline.is_some());
}

#[test]
fn test_employee_cannot_edit_or_delete_job() {
    let mut persistence: Persistence = create_test_persistence();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let alice: AuthenticatedActor = create_test_actor(&mut persistence, "alice", Role::Employee);
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Engineer");

    let edit_err = edit_job(&mut persistence, &alice, job_id, &create_job_request("Mine"))
        .unwrap_err();
    let delete_err = delete_job(&mut persistence, &alice, job_id).unwrap_err();

    assert!(matches!(edit_err, ApiError::Forbidden { .. }));
    assert!(matches!(delete_err, ApiError::Forbidden { .. }));
    assert!(persistence.get_job(job_id).unwrap().is_some());
}

#[test]
fn test_delete_job_cascades_to_applications_and_interviews_only() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let alice: AuthenticatedActor = create_test_actor(&mut persistence, "alice", Role::Employee);
    let doomed: i64 = post_test_job(&mut persistence, &hr, "Doomed");
    let kept: i64 = post_test_job(&mut persistence, &hr, "Kept");

    let doomed_app: i64 = apply_to_job(&mut persistence, &store, &alice, doomed);
    let kept_app: i64 = apply_to_job(&mut persistence, &store, &alice, kept);
    schedule_interview(
        &mut persistence,
        &hr,
        doomed_app,
        &create_schedule_request("2030-06-01", "09:00"),
    )
    .unwrap();
    schedule_interview(
        &mut persistence,
        &hr,
        kept_app,
        &create_schedule_request("2030-06-02", "09:00"),
    )
    .unwrap();

    let response = delete_job(&mut persistence, &hr, doomed).unwrap();

    assert_eq!(response.applications_removed, 1);
    assert_eq!(response.interviews_removed, 1);
    assert!(persistence.get_job(doomed).unwrap().is_none());
    assert!(persistence.get_application(doomed_app).unwrap().is_none());
    assert!(persistence.get_job(kept).unwrap().is_some());
    assert!(persistence.get_application(kept_app).unwrap().is_some());
    assert_eq!(
        persistence
            .list_interviews_for_application(kept_app)
            .unwrap()
            .len(),
        1
    );
    // Notifications belong to the user, not the job
    assert_eq!(persistence.list_notifications(alice.user_id).unwrap().len(), 2);
    cleanup_store(&store);
}

#[test]
fn test_dashboards() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let alice: AuthenticatedActor = create_test_actor(&mut persistence, "alice", Role::Employee);
    let first: i64 = post_test_job(&mut persistence, &hr, "First");
    let second: i64 = post_test_job(&mut persistence, &hr, "Second");
    apply_to_job(&mut persistence, &store, &alice, first);
    let reviewed: i64 = apply_to_job(&mut persistence, &store, &alice, second);
    update_application_status(
        &mut persistence,
        &hr,
        reviewed,
        &UpdateApplicationStatusRequest {
            status: String::from("rejected"),
            hr_notes: None,
        },
    )
    .unwrap();

    let employee = employee_dashboard(&mut persistence, &alice).unwrap();
    assert_eq!(employee.recent_jobs.len(), 2);
    assert_eq!(employee.my_applications.len(), 2);
    assert_eq!(employee.unread_notifications, 1);

    let staff = hr_dashboard(&mut persistence, &hr).unwrap();
    assert_eq!(staff.stats.total_jobs, 2);
    assert_eq!(staff.stats.active_jobs, 2);
    assert_eq!(staff.stats.total_applications, 2);
    assert_eq!(staff.stats.pending_applications, 1);
    assert_eq!(staff.recent_applications.len(), 2);

    assert!(matches!(
        hr_dashboard(&mut persistence, &alice).unwrap_err(),
        ApiError::Forbidden { .. }
    ));
    cleanup_store(&store);
}
