// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::path::PathBuf;
use talent_bridge_domain::{NewUser, Role, User};
use talent_bridge_persistence::Persistence;

use crate::auth::AuthenticatedActor;
use crate::handlers::applications::submit_application;
use crate::handlers::jobs::post_job;
use crate::request_response::{
    JobRequest, RegisterRequest, ScheduleInterviewRequest, SubmitApplicationRequest,
};
use crate::uploads::{ResumeStore, ResumeUpload};

pub const TEST_PASSWORD: &str = "password123";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// A resume store in a fresh directory under the system temp dir.
pub fn create_test_store() -> ResumeStore {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "talent_bridge_api_{}_{:x}",
        std::process::id(),
        rand::random::<u64>()
    ));
    ResumeStore::new(dir, 1024)
}

pub fn cleanup_store(store: &ResumeStore) {
    std::fs::remove_dir_all(store.root()).ok();
}

/// Creates an account directly in the store and returns its actor.
pub fn create_test_actor(
    persistence: &mut Persistence,
    username: &str,
    role: Role,
) -> AuthenticatedActor {
    let new_user: NewUser = NewUser {
        username: String::from(username),
        email: format!("{username}@example.com"),
        role,
        first_name: String::from("Test"),
        last_name: String::from(username),
        department: None,
        location: None,
        skills: None,
        phone: None,
    };
    let user_id: i64 = persistence.create_user(&new_user, TEST_PASSWORD).unwrap();
    let user: User = persistence.get_user(user_id).unwrap().unwrap();
    AuthenticatedActor::from_user(&user)
}

pub fn create_register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: String::from(username),
        email: format!("{username}@example.com"),
        password: String::from(TEST_PASSWORD),
        confirm_password: String::from(TEST_PASSWORD),
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
        department: Some(String::from("Engineering")),
        location: None,
        skills: Some(String::from("rust, sql")),
        phone: None,
    }
}

pub fn create_job_request(title: &str) -> JobRequest {
    JobRequest {
        title: String::from(title),
        department: String::from("Engineering"),
        location: String::from("Remote"),
        description: format!("Build things as a {title}"),
        ..JobRequest::default()
    }
}

pub fn post_test_job(
    persistence: &mut Persistence,
    poster: &AuthenticatedActor,
    title: &str,
) -> i64 {
    post_job(persistence, poster, &create_job_request(title))
        .unwrap()
        .job_id
}

pub fn resume(filename: &str) -> ResumeUpload {
    ResumeUpload {
        filename: String::from(filename),
        bytes: b"%PDF-1.4 resume".to_vec(),
    }
}

/// Applies without a resume and returns the application id.
pub fn apply_to_job(
    persistence: &mut Persistence,
    store: &ResumeStore,
    applicant: &AuthenticatedActor,
    job_id: i64,
) -> i64 {
    submit_application(
        persistence,
        store,
        applicant,
        job_id,
        &SubmitApplicationRequest::default(),
        None,
    )
    .unwrap()
    .application_id
}

pub fn create_schedule_request(date: &str, time: &str) -> ScheduleInterviewRequest {
    ScheduleInterviewRequest {
        scheduled_date: String::from(date),
        scheduled_time: String::from(time),
        duration: None,
        interview_type: Some(String::from("video")),
        location_or_link: Some(String::from("https://meet.example.com/abc")),
        interviewer_email: Some(String::from("lead@example.com")),
        notes: None,
    }
}
