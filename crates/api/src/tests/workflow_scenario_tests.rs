// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end hiring scenarios driven through the handlers, with emails
//! dispatched to a recording mailer the way the server does after commit.

use std::sync::Arc;
use talent_bridge_domain::{ApplicationStatus, InterviewStatus, Role};
use talent_bridge_persistence::Persistence;

use crate::ApiError;
use crate::auth::AuthenticatedActor;
use crate::handlers::applications::{
    submit_application, update_application_status, withdraw_application,
};
use crate::handlers::interviews::schedule_interview;
use crate::notifications::{EmailMessage, NotificationDispatcher, RecordingMailer};
use crate::request_response::{
    ScheduleInterviewRequest, SubmitApplicationRequest, UpdateApplicationStatusRequest,
};
use crate::tests::helpers::{
    apply_to_job, cleanup_store, create_test_actor, create_test_persistence, create_test_store,
    post_test_job,
};
use crate::uploads::ResumeStore;

fn status_request(status: &str) -> UpdateApplicationStatusRequest {
    UpdateApplicationStatusRequest {
        status: String::from(status),
        hr_notes: None,
    }
}

#[test]
fn test_submit_review_schedule_scenario() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let mailer: Arc<RecordingMailer> = Arc::new(RecordingMailer::new());
    let dispatcher: NotificationDispatcher = NotificationDispatcher::new(
        mailer.clone(),
        Some(String::from("hr@talentbridge.com")),
    );
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let applicant: AuthenticatedActor =
        create_test_actor(&mut persistence, "applicant", Role::Employee);
    for i in 1..7 {
        post_test_job(&mut persistence, &hr, &format!("Filler {i}"));
    }
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Platform Engineer");
    assert_eq!(job_id, 7);

    let submitted = submit_application(
        &mut persistence,
        &store,
        &applicant,
        job_id,
        &SubmitApplicationRequest::default(),
        None,
    )
    .unwrap();
    assert_eq!(submitted.status, "submitted");
    let application_id: i64 = submitted.application_id;

    let reviewed = update_application_status(
        &mut persistence,
        &hr,
        application_id,
        &status_request("interview"),
    )
    .unwrap();
    assert_eq!(dispatcher.dispatch(&reviewed.emails), 1);

    let sent: Vec<EmailMessage> = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "applicant@example.com");
    assert!(sent[0].subject.contains("Platform Engineer"));

    let scheduled = schedule_interview(
        &mut persistence,
        &hr,
        application_id,
        &ScheduleInterviewRequest {
            scheduled_date: String::from("2024-06-01"),
            scheduled_time: String::from("14:30"),
            duration: None,
            interview_type: None,
            location_or_link: Some(String::from("Room 4")),
            interviewer_email: None,
            notes: None,
        },
    )
    .unwrap();
    assert_eq!(dispatcher.dispatch(&scheduled.emails), 1);

    let application = persistence.get_application(application_id).unwrap().unwrap();
    assert_eq!(application.status, ApplicationStatus::Interview);
    let interview = persistence
        .get_interview(scheduled.response.interview_id)
        .unwrap()
        .unwrap();
    assert_eq!(interview.status, InterviewStatus::Scheduled);

    let sent: Vec<EmailMessage> = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Interview Invitation - Platform Engineer");
    assert!(sent[1].html.contains("June 01, 2024 at 02:30 PM"));
    assert!(sent[1].html.contains("Room 4"));
    cleanup_store(&store);
}

#[test]
fn test_withdraw_from_offer_is_rejected_and_status_kept() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let applicant: AuthenticatedActor =
        create_test_actor(&mut persistence, "applicant", Role::Employee);
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Engineer");
    let application_id: i64 = apply_to_job(&mut persistence, &store, &applicant, job_id);
    update_application_status(&mut persistence, &hr, application_id, &status_request("offer"))
        .unwrap();

    let err = withdraw_application(&mut persistence, &applicant, application_id).unwrap_err();

    assert!(matches!(err, ApiError::InvalidState { .. }));
    assert_eq!(
        persistence
            .get_application(application_id)
            .unwrap()
            .unwrap()
            .status,
        ApplicationStatus::Offer
    );
}

#[test]
fn test_every_status_may_follow_every_other() {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let applicant: AuthenticatedActor =
        create_test_actor(&mut persistence, "applicant", Role::Employee);
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Engineer");
    let application_id: i64 = apply_to_job(&mut persistence, &store, &applicant, job_id);

    for status in ["withdrawn", "offer", "submitted", "rejected", "interview"] {
        let outcome = update_application_status(
            &mut persistence,
            &hr,
            application_id,
            &status_request(status),
        )
        .unwrap();
        assert_eq!(outcome.emails.len(), 1, "moving to {status}");
    }

    assert_eq!(
        persistence
            .list_notifications(applicant.user_id)
            .unwrap()
            .len(),
        5
    );
}
