// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::{
    Actor, Application, ApplicationStatus, Interview, InterviewStatus, InterviewType, Job,
    JobStatus, Role,
};
use time::macros::datetime;

pub const APPLICANT_ID: i64 = 10;
pub const OTHER_EMPLOYEE_ID: i64 = 11;
pub const HR_ID: i64 = 1;

pub fn applicant() -> Actor {
    Actor::new(APPLICANT_ID, Role::Employee)
}

pub fn other_employee() -> Actor {
    Actor::new(OTHER_EMPLOYEE_ID, Role::Employee)
}

pub fn hr() -> Actor {
    Actor::new(HR_ID, Role::Hr)
}

pub fn manager() -> Actor {
    Actor::new(2, Role::Manager)
}

pub fn create_test_job() -> Job {
    Job {
        job_id: 7,
        title: String::from("Platform Engineer"),
        department: String::from("Engineering"),
        location: String::from("Remote"),
        description: String::from("Keep the lights on"),
        requirements: None,
        skills_required: Some(String::from("Rust, SQL")),
        salary_range: None,
        job_type: String::from("Full-time"),
        status: JobStatus::Active,
        deadline: None,
        posted_by: HR_ID,
        created_at: String::from("2024-05-01 09:00:00"),
        updated_at: String::from("2024-05-01 09:00:00"),
    }
}

pub fn create_test_application(status: ApplicationStatus) -> Application {
    Application {
        application_id: 42,
        job_id: 7,
        user_id: APPLICANT_ID,
        cover_letter: Some(String::from("Hello")),
        resume_filename: None,
        status,
        hr_notes: None,
        applied_at: String::from("2024-05-02 10:00:00"),
        updated_at: String::from("2024-05-02 10:00:00"),
    }
}

pub fn create_test_interview() -> Interview {
    Interview {
        interview_id: 5,
        application_id: 42,
        scheduled_at: datetime!(2024-06-01 14:30),
        duration_minutes: 60,
        interview_type: InterviewType::Video,
        location_or_link: Some(String::from("https://meet.example.com/abc")),
        interviewer_email: None,
        notes: None,
        status: InterviewStatus::Scheduled,
        created_at: String::from("2024-05-03 10:00:00"),
        updated_at: String::from("2024-05-03 10:00:00"),
    }
}
