// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for interview scheduling.

use talent_bridge_domain::{
    ApplicationStatus, DEFAULT_DURATION_MINUTES, InterviewStatus, InterviewType, Role,
};
use talent_bridge_persistence::Persistence;

use crate::ApiError;
use crate::auth::AuthenticatedActor;
use crate::handlers::interviews::{
    list_interviews, reschedule_interview, schedule_interview, update_interview,
};
use crate::request_response::{
    ListInterviewsRequest, RescheduleInterviewRequest, ScheduleInterviewRequest,
    UpdateInterviewRequest,
};
use crate::tests::helpers::{
    apply_to_job, create_schedule_request, create_test_actor, create_test_persistence,
    create_test_store, post_test_job,
};
use crate::uploads::ResumeStore;

struct Fixture {
    persistence: Persistence,
    hr: AuthenticatedActor,
    alice: AuthenticatedActor,
    application_id: i64,
}

fn fixture() -> Fixture {
    let mut persistence: Persistence = create_test_persistence();
    let store: ResumeStore = create_test_store();
    let hr: AuthenticatedActor = create_test_actor(&mut persistence, "hr", Role::Hr);
    let alice: AuthenticatedActor = create_test_actor(&mut persistence, "alice", Role::Employee);
    let job_id: i64 = post_test_job(&mut persistence, &hr, "Engineer");
    let application_id: i64 = apply_to_job(&mut persistence, &store, &alice, job_id);
    Fixture {
        persistence,
        hr,
        alice,
        application_id,
    }
}

#[test]
fn test_schedule_books_interview_and_invites() {
    let mut f: Fixture = fixture();

    let outcome = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap();

    assert_eq!(outcome.response.status, "scheduled");
    let interview = f
        .persistence
        .get_interview(outcome.response.interview_id)
        .unwrap()
        .unwrap();
    assert_eq!(interview.duration_minutes, DEFAULT_DURATION_MINUTES);
    assert_eq!(interview.interview_type, InterviewType::Video);
    assert_eq!(interview.status, InterviewStatus::Scheduled);
    assert_eq!(
        f.persistence
            .get_application(f.application_id)
            .unwrap()
            .unwrap()
            .status,
        ApplicationStatus::Interview
    );

    assert_eq!(outcome.emails.len(), 1);
    let email = &outcome.emails[0];
    assert_eq!(email.to, "alice@example.com");
    assert_eq!(email.subject, "Interview Invitation - Engineer");
    assert!(email.html.contains("June 01, 2030 at 02:30 PM"));
    assert!(email.html.contains("https://meet.example.com/abc"));
}

#[test]
fn test_schedule_defaults_to_in_person() {
    let mut f: Fixture = fixture();
    let request: ScheduleInterviewRequest = ScheduleInterviewRequest {
        interview_type: None,
        ..create_schedule_request("2030-06-01", "09:00")
    };

    let outcome =
        schedule_interview(&mut f.persistence, &f.hr, f.application_id, &request).unwrap();

    let interview = f
        .persistence
        .get_interview(outcome.response.interview_id)
        .unwrap()
        .unwrap();
    assert_eq!(interview.interview_type, InterviewType::InPerson);
}

#[test]
fn test_schedule_rejects_bad_input_without_side_effects() {
    let mut f: Fixture = fixture();

    let bad_time = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "2:30pm"),
    )
    .unwrap_err();
    let bad_duration = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &ScheduleInterviewRequest {
            duration: Some(0),
            ..create_schedule_request("2030-06-01", "14:30")
        },
    )
    .unwrap_err();
    let bad_type = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &ScheduleInterviewRequest {
            interview_type: Some(String::from("carrier-pigeon")),
            ..create_schedule_request("2030-06-01", "14:30")
        },
    )
    .unwrap_err();

    assert!(
        matches!(bad_time, ApiError::InvalidInput { ref field, .. } if field == "scheduled_date")
    );
    assert!(
        matches!(bad_duration, ApiError::InvalidInput { ref field, .. } if field == "duration")
    );
    assert!(
        matches!(bad_type, ApiError::InvalidInput { ref field, .. } if field == "interview_type")
    );
    assert!(
        f.persistence
            .list_interviews_for_application(f.application_id)
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        f.persistence
            .get_application(f.application_id)
            .unwrap()
            .unwrap()
            .status,
        ApplicationStatus::Submitted
    );
}

#[test]
fn test_employee_cannot_schedule() {
    let mut f: Fixture = fixture();

    let err = schedule_interview(
        &mut f.persistence,
        &f.alice,
        f.application_id,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));

    let zoom: ScheduleInterviewRequest = ScheduleInterviewRequest {
        interview_type: Some(String::from("zoom")),
        ..create_schedule_request("not a date", "14:30")
    };
    for application_id in [f.application_id, 9999] {
        let err = schedule_interview(&mut f.persistence, &f.alice, application_id, &zoom)
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }), "{application_id}: {err:?}");
    }

    assert_eq!(
        f.persistence
            .get_application(f.application_id)
            .unwrap()
            .unwrap()
            .status,
        ApplicationStatus::Submitted
    );
}

#[test]
fn test_employee_cannot_update_or_reschedule_interview() {
    let mut f: Fixture = fixture();
    let interview_id: i64 = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap()
    .response
    .interview_id;

    for id in [interview_id, 9999] {
        let err = update_interview(
            &mut f.persistence,
            &f.alice,
            id,
            &UpdateInterviewRequest {
                status: Some(String::from("bogus")),
                notes: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }), "update {id}: {err:?}");

        let err = reschedule_interview(
            &mut f.persistence,
            &f.alice,
            id,
            &RescheduleInterviewRequest {
                scheduled_date: String::from("someday"),
                scheduled_time: String::from("25:99"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }), "reschedule {id}: {err:?}");
    }

    let interview = f.persistence.get_interview(interview_id).unwrap().unwrap();
    assert_eq!(interview.status, InterviewStatus::Scheduled);
}

#[test]
fn test_schedule_for_missing_application_is_not_found() {
    let mut f: Fixture = fixture();

    let err = schedule_interview(
        &mut f.persistence,
        &f.hr,
        999,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_update_interview_changes_only_given_fields() {
    let mut f: Fixture = fixture();
    let interview_id: i64 = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap()
    .response
    .interview_id;

    let notes_only = update_interview(
        &mut f.persistence,
        &f.hr,
        interview_id,
        &UpdateInterviewRequest {
            status: None,
            notes: Some(String::from("Bring laptop")),
        },
    )
    .unwrap();
    assert_eq!(notes_only.status, "scheduled");

    let completed = update_interview(
        &mut f.persistence,
        &f.hr,
        interview_id,
        &UpdateInterviewRequest {
            status: Some(String::from("completed")),
            notes: None,
        },
    )
    .unwrap();
    assert_eq!(completed.status, "completed");
    assert_eq!(completed.application_id, f.application_id);

    let interview = f.persistence.get_interview(interview_id).unwrap().unwrap();
    assert_eq!(interview.status, InterviewStatus::Completed);
    assert_eq!(interview.notes.as_deref(), Some("Bring laptop"));

    assert!(matches!(
        update_interview(
            &mut f.persistence,
            &f.alice,
            interview_id,
            &UpdateInterviewRequest::default()
        )
        .unwrap_err(),
        ApiError::Forbidden { .. }
    ));
}

#[test]
fn test_reschedule_moves_slot_and_sends_new_invitation() {
    let mut f: Fixture = fixture();
    let interview_id: i64 = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "14:30"),
    )
    .unwrap()
    .response
    .interview_id;

    let outcome = reschedule_interview(
        &mut f.persistence,
        &f.hr,
        interview_id,
        &RescheduleInterviewRequest {
            scheduled_date: String::from("2030-06-03"),
            scheduled_time: String::from("10:00"),
        },
    )
    .unwrap();

    assert_eq!(outcome.response.status, "rescheduled");
    assert_eq!(outcome.emails.len(), 1);
    assert!(outcome.emails[0].html.contains("June 03, 2030 at 10:00 AM"));

    let interview = f.persistence.get_interview(interview_id).unwrap().unwrap();
    assert_eq!(interview.status, InterviewStatus::Rescheduled);
    assert_eq!(
        f.persistence.list_notifications(f.alice.user_id).unwrap().len(),
        2
    );
}

#[test]
fn test_missing_interview_is_not_found() {
    let mut f: Fixture = fixture();

    let err = reschedule_interview(
        &mut f.persistence,
        &f.hr,
        77,
        &RescheduleInterviewRequest {
            scheduled_date: String::from("2030-06-03"),
            scheduled_time: String::from("10:00"),
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_list_interviews_depends_on_role() {
    let mut f: Fixture = fixture();
    let bob: AuthenticatedActor = create_test_actor(&mut f.persistence, "bob", Role::Employee);
    let late: i64 = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-07-01", "09:00"),
    )
    .unwrap()
    .response
    .interview_id;
    let early: i64 = schedule_interview(
        &mut f.persistence,
        &f.hr,
        f.application_id,
        &create_schedule_request("2030-06-01", "09:00"),
    )
    .unwrap()
    .response
    .interview_id;
    update_interview(
        &mut f.persistence,
        &f.hr,
        late,
        &UpdateInterviewRequest {
            status: Some(String::from("cancelled")),
            notes: None,
        },
    )
    .unwrap();

    let own = list_interviews(&mut f.persistence, &f.alice, &ListInterviewsRequest::default())
        .unwrap();
    let ids: Vec<i64> = own
        .interviews
        .items
        .iter()
        .map(|i| i.interview.interview_id)
        .collect();
    assert_eq!(ids, vec![early, late]);
    assert_eq!(own.interviews.total_pages, 1);

    let none_for_bob =
        list_interviews(&mut f.persistence, &bob, &ListInterviewsRequest::default()).unwrap();
    assert!(none_for_bob.interviews.items.is_empty());

    let cancelled = list_interviews(
        &mut f.persistence,
        &f.hr,
        &ListInterviewsRequest {
            status: Some(String::from("cancelled")),
            page: None,
        },
    )
    .unwrap();
    assert_eq!(cancelled.interviews.total, 1);
    assert_eq!(cancelled.interviews.items[0].interview.interview_id, late);
    assert_eq!(cancelled.interviews.items[0].job_title, "Engineer");
}
