// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    APPLICANT_ID, applicant, create_test_application, create_test_interview, create_test_job, hr,
};
use crate::{Command, CoreError, Effect, NotificationIntent, TransitionResult, WorkflowContext, apply};
use talent_bridge_domain::{
    ApplicationStatus, DomainError, InterviewStatus, InterviewType, NewInterview,
};
use time::macros::datetime;

fn schedule_command(date: &str, time: &str) -> Command {
    Command::ScheduleInterview {
        application_id: 42,
        date: String::from(date),
        time: String::from(time),
        duration_minutes: 45,
        interview_type: InterviewType::InPerson,
        location_or_link: Some(String::from("Room 4")),
        interviewer_email: Some(String::from("lead@example.com")),
        notes: None,
    }
}

fn application_context() -> WorkflowContext {
    WorkflowContext::for_application(
        create_test_application(ApplicationStatus::Submitted),
        create_test_job(),
    )
}

fn interview_context() -> WorkflowContext {
    WorkflowContext::for_interview(
        create_test_interview(),
        create_test_application(ApplicationStatus::Interview),
        create_test_job(),
    )
}

#[test]
fn test_schedule_produces_interview_and_invitation() {
    let result: TransitionResult =
        apply(&application_context(), schedule_command("2024-06-01", "14:30"), &hr()).unwrap();

    assert_eq!(
        result.effect,
        Effect::ScheduleInterview(NewInterview {
            application_id: 42,
            scheduled_at: datetime!(2024-06-01 14:30),
            duration_minutes: 45,
            interview_type: InterviewType::InPerson,
            location_or_link: Some(String::from("Room 4")),
            interviewer_email: Some(String::from("lead@example.com")),
            notes: None,
        })
    );
    assert_eq!(
        result.notification,
        Some(NotificationIntent::InterviewInvitation {
            recipient_user_id: APPLICANT_ID,
            job_title: String::from("Platform Engineer"),
            scheduled_at: datetime!(2024-06-01 14:30),
            interview_type: InterviewType::InPerson,
            location_or_link: Some(String::from("Room 4")),
        })
    );
}

#[test]
fn test_schedule_rejects_bad_date() {
    let result = apply(&application_context(), schedule_command("2024-06-01", "2pm"), &hr());
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidScheduleDateTime { .. }
        ))
    ));
}

#[test]
fn test_schedule_rejects_zero_duration() {
    let mut command = schedule_command("2024-06-01", "14:30");
    if let Command::ScheduleInterview {
        ref mut duration_minutes,
        ..
    } = command
    {
        *duration_minutes = 0;
    }
    let result = apply(&application_context(), command, &hr());
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDuration(0)))
    );
}

#[test]
fn test_employee_cannot_schedule() {
    let result = apply(
        &application_context(),
        schedule_command("2024-06-01", "14:30"),
        &applicant(),
    );
    assert!(matches!(result, Err(CoreError::Forbidden { .. })));
}

#[test]
fn test_permission_checked_before_date() {
    let result = apply(&application_context(), schedule_command("bad", "bad"), &applicant());
    assert!(matches!(result, Err(CoreError::Forbidden { .. })));
}

#[test]
fn test_update_interview_touches_supplied_fields_only() {
    let command = Command::UpdateInterview {
        interview_id: 5,
        status: Some(InterviewStatus::Completed),
        notes: None,
    };
    let result: TransitionResult = apply(&interview_context(), command, &hr()).unwrap();

    assert_eq!(
        result.effect,
        Effect::UpdateInterview {
            interview_id: 5,
            status: Some(InterviewStatus::Completed),
            notes: None,
        }
    );
    assert!(result.notification.is_none());
}

#[test]
fn test_employee_cannot_update_interview() {
    let command = Command::UpdateInterview {
        interview_id: 5,
        status: Some(InterviewStatus::Cancelled),
        notes: None,
    };
    assert!(matches!(
        apply(&interview_context(), command, &applicant()),
        Err(CoreError::Forbidden { .. })
    ));
}

#[test]
fn test_reschedule_sends_fresh_invitation() {
    let command = Command::RescheduleInterview {
        interview_id: 5,
        date: String::from("2024-06-03"),
        time: String::from("09:00"),
    };
    let result: TransitionResult = apply(&interview_context(), command, &hr()).unwrap();

    assert_eq!(
        result.effect,
        Effect::RescheduleInterview {
            interview_id: 5,
            scheduled_at: datetime!(2024-06-03 09:00),
        }
    );
    let Some(NotificationIntent::InterviewInvitation {
        scheduled_at,
        interview_type,
        location_or_link,
        ..
    }) = result.notification
    else {
        panic!("expected an invitation");
    };
    assert_eq!(scheduled_at, datetime!(2024-06-03 09:00));
    assert_eq!(interview_type, InterviewType::Video);
    assert_eq!(
        location_or_link.as_deref(),
        Some("https://meet.example.com/abc")
    );
}

#[test]
fn test_reschedule_rejects_bad_time() {
    let command = Command::RescheduleInterview {
        interview_id: 5,
        date: String::from("2024-06-03"),
        time: String::from("25:00"),
    };
    assert!(matches!(
        apply(&interview_context(), command, &hr()),
        Err(CoreError::DomainViolation(_))
    ));
}

#[test]
fn test_invitation_text() {
    let intent = NotificationIntent::InterviewInvitation {
        recipient_user_id: APPLICANT_ID,
        job_title: String::from("Platform Engineer"),
        scheduled_at: datetime!(2024-06-01 14:30),
        interview_type: InterviewType::Phone,
        location_or_link: None,
    };
    assert_eq!(intent.title(), "Interview Invitation - Platform Engineer");
    assert_eq!(
        intent.message(),
        "Phone interview for Platform Engineer scheduled on June 01, 2024 at 02:30 PM"
    );
}
