// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_user, seed_user};
use crate::{Persistence, PersistenceError, verify_password};
use talent_bridge_domain::{ProfileUpdate, Role};

#[test]
fn test_create_user_hashes_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);

    let credentials = persistence.get_user_credentials(user_id).unwrap().unwrap();
    assert_ne!(credentials.password_hash, "password123");
    assert!(verify_password("password123", &credentials.password_hash).unwrap());
    assert!(!verify_password("wrong", &credentials.password_hash).unwrap());
    assert_eq!(credentials.user.role, Role::Employee);
}

#[test]
fn test_login_by_username_or_email() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);

    let by_name = persistence.get_user_by_login("alice").unwrap().unwrap();
    let by_email = persistence
        .get_user_by_login("ALICE@example.com")
        .unwrap()
        .unwrap();

    assert_eq!(by_name.user.user_id, user_id);
    assert_eq!(by_email.user.user_id, user_id);
    assert!(persistence.get_user_by_login("bob").unwrap().is_none());
}

#[test]
fn test_duplicate_username_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    seed_user(&mut persistence, "alice", Role::Employee);

    let mut duplicate = create_test_user("ALICE", Role::Employee);
    duplicate.email = String::from("other@example.com");
    let result = persistence.create_user(&duplicate, "password123");

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_email_stored_lowercase_and_unique() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut user = create_test_user("alice", Role::Employee);
    user.email = String::from("Alice@Example.com");
    persistence.create_user(&user, "password123").unwrap();

    assert!(persistence.email_exists("alice@example.com").unwrap());

    let mut duplicate = create_test_user("alice2", Role::Employee);
    duplicate.email = String::from("ALICE@EXAMPLE.COM");
    assert!(matches!(
        persistence.create_user(&duplicate, "password123"),
        Err(PersistenceError::UniqueViolation(_))
    ));
}

#[test]
fn test_update_profile_and_resume() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);

    persistence
        .update_profile(
            user_id,
            &ProfileUpdate {
                first_name: String::from("Alicia"),
                last_name: String::from("Able"),
                department: Some(String::from("Finance")),
                location: None,
                phone: Some(String::from("555-0100")),
                skills: Some(String::from("Excel")),
            },
            Some("abc_resume.pdf"),
        )
        .unwrap();

    let user = persistence.get_user(user_id).unwrap().unwrap();
    assert_eq!(user.full_name(), "Alicia Able");
    assert_eq!(user.department.as_deref(), Some("Finance"));
    assert_eq!(user.resume_filename.as_deref(), Some("abc_resume.pdf"));
}

#[test]
fn test_update_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);

    persistence.update_password(user_id, "newpassword1").unwrap();

    let credentials = persistence.get_user_credentials(user_id).unwrap().unwrap();
    assert!(verify_password("newpassword1", &credentials.password_hash).unwrap());
    assert!(!verify_password("password123", &credentials.password_hash).unwrap());
}

#[test]
fn test_update_missing_user_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let update = ProfileUpdate {
        first_name: String::from("Nobody"),
        last_name: String::from("Here"),
        department: None,
        location: None,
        phone: None,
        skills: None,
    };
    let result = persistence.update_profile(404, &update, Some("abc_resume.pdf"));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_update_profile_without_resume_keeps_existing_name() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);
    let update = ProfileUpdate {
        first_name: String::from("Alicia"),
        last_name: String::from("Able"),
        department: None,
        location: None,
        phone: None,
        skills: None,
    };

    persistence
        .update_profile(user_id, &update, Some("abc_resume.pdf"))
        .unwrap();
    persistence.update_profile(user_id, &update, None).unwrap();

    let user = persistence.get_user(user_id).unwrap().unwrap();
    assert_eq!(user.resume_filename.as_deref(), Some("abc_resume.pdf"));
}

#[test]
fn test_session_lifecycle() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = seed_user(&mut persistence, "alice", Role::Employee);

    let session_id = persistence
        .create_session("token-abc", user_id, "2099-01-01T00:00:00.000000000Z")
        .unwrap();
    let session = persistence.get_session_by_token("token-abc").unwrap().unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.user_id, user_id);

    persistence.update_session_activity(session_id).unwrap();
    persistence.delete_session("token-abc").unwrap();
    assert!(persistence.get_session_by_token("token-abc").unwrap().is_none());

    persistence.delete_session("token-abc").unwrap();
}
