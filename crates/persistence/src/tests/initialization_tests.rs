// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::tests::seed_user;
use talent_bridge_domain::Role;

#[test]
fn test_persistence_initialization() {
    let result = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_enforced() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    seed_user(&mut db1, "alice", Role::Employee);

    assert!(db1.username_exists("alice").unwrap());
    assert!(!db2.username_exists("alice").unwrap());
}

#[test]
fn test_file_database_persists_between_connections() {
    let dir = std::env::temp_dir().join(format!(
        "talent_bridge_persistence_{}_{}",
        std::process::id(),
        rand_suffix()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("portal.db");

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap().with_password_cost(4);
        seed_user(&mut persistence, "carol", Role::Hr);
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert!(reopened.username_exists("carol").unwrap());

    drop(reopened);
    std::fs::remove_dir_all(&dir).ok();
}

fn rand_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}
