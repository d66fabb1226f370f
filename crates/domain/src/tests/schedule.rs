// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, InterviewStatus, InterviewType, format_schedule_for_display,
    format_schedule_for_storage, parse_schedule, parse_stored_schedule, validate_duration,
};
use time::macros::datetime;

#[test]
fn test_parse_schedule_accepts_date_and_time() {
    let at = parse_schedule("2024-06-01", "14:30").unwrap();
    assert_eq!(at, datetime!(2024-06-01 14:30));
}

#[test]
fn test_parse_schedule_trims_whitespace() {
    let at = parse_schedule(" 2024-06-01 ", " 09:05").unwrap();
    assert_eq!(at, datetime!(2024-06-01 09:05));
}

#[test]
fn test_parse_schedule_rejects_malformed_input() {
    for (date, time) in [
        ("2024-06-01", "9:30"),
        ("06/01/2024", "14:30"),
        ("2024-06-01", "14:30:00"),
        ("2024-13-01", "10:00"),
        ("", "10:00"),
    ] {
        let result = parse_schedule(date, time);
        assert!(
            matches!(result, Err(DomainError::InvalidScheduleDateTime { .. })),
            "expected rejection for {date} {time}"
        );
    }
}

#[test]
fn test_storage_format_round_trips() {
    let at = datetime!(2024-06-01 14:30);
    let stored: String = format_schedule_for_storage(at);
    assert_eq!(stored, "2024-06-01 14:30:00");
    assert_eq!(parse_stored_schedule(&stored).unwrap(), at);
    assert_eq!(parse_stored_schedule("2024-06-01 14:30").unwrap(), at);
}

#[test]
fn test_display_format_matches_invitation_text() {
    let at = datetime!(2024-06-01 14:30);
    assert_eq!(format_schedule_for_display(at), "June 01, 2024 at 02:30 PM");
}

#[test]
fn test_duration_bounds() {
    assert_eq!(validate_duration(60), Ok(60));
    assert!(validate_duration(0).is_err());
    assert!(validate_duration(24 * 60 + 1).is_err());
}

#[test]
fn test_interview_tags() {
    assert_eq!("in-person".parse::<InterviewType>(), Ok(InterviewType::InPerson));
    assert_eq!(InterviewType::Video.label(), "Video");
    assert!("onsite".parse::<InterviewType>().is_err());
    assert_eq!(
        "rescheduled".parse::<InterviewStatus>(),
        Ok(InterviewStatus::Rescheduled)
    );
    assert!("postponed".parse::<InterviewStatus>().is_err());
}
