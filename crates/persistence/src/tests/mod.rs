// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod notification_tests;
mod user_tests;

use crate::Persistence;
use talent_bridge::{Effect, TransitionResult};
use talent_bridge_domain::{JobDraft, JobStatus, NewApplication, NewUser, Role};

pub fn create_test_user(username: &str, role: Role) -> NewUser {
    NewUser {
        username: String::from(username),
        email: format!("{username}@example.com"),
        role,
        first_name: String::from("Test"),
        last_name: String::from(username),
        department: None,
        location: None,
        skills: None,
        phone: None,
    }
}

pub fn create_test_draft(title: &str, department: &str, location: &str) -> JobDraft {
    JobDraft {
        title: String::from(title),
        department: String::from(department),
        location: String::from(location),
        description: format!("{title} role"),
        requirements: None,
        skills_required: None,
        salary_range: None,
        job_type: String::from("Full-time"),
        status: JobStatus::Active,
        deadline: None,
    }
}

pub fn seed_user(persistence: &mut Persistence, username: &str, role: Role) -> i64 {
    persistence
        .create_user(&create_test_user(username, role), "password123")
        .expect("Failed to create user")
}

pub fn seed_job(persistence: &mut Persistence, posted_by: i64, title: &str) -> i64 {
    persistence
        .create_job(&create_test_draft(title, "Engineering", "Remote"), posted_by)
        .expect("Failed to create job")
}

pub fn seed_application(persistence: &mut Persistence, job_id: i64, user_id: i64) -> i64 {
    let result: TransitionResult = TransitionResult::silent(Effect::CreateApplication(
        NewApplication {
            job_id,
            user_id,
            cover_letter: Some(String::from("Please consider me")),
            resume_filename: None,
        },
    ));
    persistence
        .persist_transition(&result)
        .expect("Failed to persist application")
        .application_id
        .expect("Application id missing")
}
