// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{seed_application, seed_job, seed_user};
use crate::{Persistence, PersistenceError};
use talent_bridge::{Effect, NotificationIntent, TransitionResult};
use talent_bridge_domain::{ApplicationStatus, Role};

fn notify(persistence: &mut Persistence, application_id: i64, user_id: i64, status: ApplicationStatus) {
    persistence
        .persist_transition(&TransitionResult::notifying(
            Effect::SetApplicationStatus {
                application_id,
                status,
            },
            NotificationIntent::StatusUpdate {
                recipient_user_id: user_id,
                job_title: String::from("Engineer"),
                status,
            },
        ))
        .unwrap();
}

#[test]
fn test_notifications_listed_newest_first_and_marked_read() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let hr_id: i64 = seed_user(&mut persistence, "hr", Role::Hr);
    let alice: i64 = seed_user(&mut persistence, "alice", Role::Employee);
    let job_id: i64 = seed_job(&mut persistence, hr_id, "Engineer");
    let application_id: i64 = seed_application(&mut persistence, job_id, alice);

    notify(&mut persistence, application_id, alice, ApplicationStatus::Interview);
    notify(&mut persistence, application_id, alice, ApplicationStatus::Offer);

    let notifications = persistence.list_notifications(alice).unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications[0].message.ends_with("Offer"));
    assert_eq!(persistence.count_unread_notifications(alice).unwrap(), 2);

    persistence
        .mark_notification_read(notifications[0].notification_id)
        .unwrap();

    assert_eq!(persistence.count_unread_notifications(alice).unwrap(), 1);
    assert!(
        persistence
            .get_notification(notifications[0].notification_id)
            .unwrap()
            .unwrap()
            .is_read
    );
    assert!(persistence.list_notifications(hr_id).unwrap().is_empty());
}

#[test]
fn test_mark_missing_notification_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(matches!(
        persistence.mark_notification_read(5),
        Err(PersistenceError::NotFound(_))
    ));
}
