// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, JobDraft, JobStatus, NewUser, Role, format_date, is_allowed_resume,
    normalize_email, optional_text, parse_optional_date, sanitize_filename, validate_job_draft,
    validate_new_user, validate_resume_filename, validate_username,
};
use time::macros::date;

fn create_test_user() -> NewUser {
    NewUser {
        username: String::from("alice"),
        email: String::from("alice@example.com"),
        role: Role::Employee,
        first_name: String::from("Alice"),
        last_name: String::from("Able"),
        department: None,
        location: None,
        skills: None,
        phone: None,
    }
}

fn create_test_draft() -> JobDraft {
    JobDraft {
        title: String::from("Backend Engineer"),
        department: String::from("Engineering"),
        location: String::from("Remote"),
        description: String::from("Build services"),
        requirements: None,
        skills_required: Some(String::from("Rust")),
        salary_range: None,
        job_type: String::from("Full-time"),
        status: JobStatus::Active,
        deadline: None,
    }
}

#[test]
fn test_resume_extensions_case_insensitive() {
    assert!(is_allowed_resume("resume.pdf"));
    assert!(is_allowed_resume("resume.PDF"));
    assert!(is_allowed_resume("cv.Doc"));
    assert!(is_allowed_resume("cv.final.docx"));
}

#[test]
fn test_resume_other_extensions_rejected() {
    assert!(!is_allowed_resume("resume.exe"));
    assert!(!is_allowed_resume("resume"));
    assert!(!is_allowed_resume("resume.pdf.exe"));
    assert!(!is_allowed_resume("resume.txt"));
    assert_eq!(
        validate_resume_filename("resume.exe"),
        Err(DomainError::DisallowedFileType {
            filename: String::from("resume.exe")
        })
    );
    assert_eq!(validate_resume_filename("  "), Err(DomainError::MissingFileName));
}

#[test]
fn test_sanitize_filename_strips_paths_and_symbols() {
    assert_eq!(
        sanitize_filename("../../etc/passwd.pdf").as_deref(),
        Some("passwd.pdf")
    );
    assert_eq!(
        sanitize_filename("C:\\Users\\me\\My Resume (1).pdf").as_deref(),
        Some("My_Resume_1.pdf")
    );
    assert_eq!(sanitize_filename(".hidden.docx").as_deref(), Some("hidden.docx"));
    assert_eq!(sanitize_filename("***"), None);
}

#[test]
fn test_normalize_email() {
    assert_eq!(
        normalize_email(" Alice@Example.COM ").unwrap(),
        "alice@example.com"
    );
    assert!(normalize_email("alice").is_err());
    assert!(normalize_email("@example.com").is_err());
    assert!(normalize_email("alice@example").is_err());
    assert!(normalize_email("al ice@example.com").is_err());
}

#[test]
fn test_validate_username() {
    assert_eq!(validate_username(" bob_smith ").unwrap(), "bob_smith");
    assert!(validate_username("").is_err());
    assert!(validate_username("bob smith").is_err());
}

#[test]
fn test_optional_text_maps_blank_to_none() {
    assert_eq!(optional_text(Some("  ")), None);
    assert_eq!(optional_text(None), None);
    assert_eq!(optional_text(Some(" x ")).as_deref(), Some("x"));
}

#[test]
fn test_parse_optional_date() {
    assert_eq!(parse_optional_date("deadline", None), Ok(None));
    assert_eq!(parse_optional_date("deadline", Some("")), Ok(None));
    assert_eq!(
        parse_optional_date("deadline", Some("2026-12-31")),
        Ok(Some(date!(2026 - 12 - 31)))
    );
    assert!(parse_optional_date("deadline", Some("12/31/2026")).is_err());
    assert_eq!(format_date(date!(2026 - 01 - 05)), "2026-01-05");
}

#[test]
fn test_validate_new_user() {
    assert!(validate_new_user(&create_test_user()).is_ok());

    let mut user: NewUser = create_test_user();
    user.first_name = String::from("   ");
    assert_eq!(
        validate_new_user(&user),
        Err(DomainError::MissingField("first_name"))
    );
}

#[test]
fn test_validate_job_draft() {
    assert!(validate_job_draft(&create_test_draft()).is_ok());

    let mut draft: JobDraft = create_test_draft();
    draft.description = String::new();
    assert_eq!(
        validate_job_draft(&draft),
        Err(DomainError::MissingField("description"))
    );
}
