// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use talent_bridge_domain::{NewUser, ProfileUpdate};
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Creates a user account with a bcrypt hash of `password`.
///
/// Usernames are stored trimmed and emails lowercased; both columns are
/// unique without regard to case.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the username or email is
/// taken, or another error if hashing or the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    user: &NewUser,
    password: &str,
    cost: u32,
) -> Result<i64, PersistenceError> {
    let username: &str = user.username.trim();
    let email: String = user.email.trim().to_lowercase();

    info!(username, role = user.role.as_str(), "Creating user");

    let password_hash: String = bcrypt::hash(password, cost)?;

    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::email.eq(&email),
            users::password_hash.eq(&password_hash),
            users::role.eq(user.role.as_str()),
            users::first_name.eq(user.first_name.trim()),
            users::last_name.eq(user.last_name.trim()),
            users::department.eq(user.department.as_deref()),
            users::location.eq(user.location.as_deref()),
            users::skills.eq(user.skills.as_deref()),
            users::phone.eq(user.phone.as_deref()),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, "User created");
    Ok(user_id)
}

fn ensure_user_updated(rows: usize, user_id: i64) -> Result<(), PersistenceError> {
    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }
    Ok(())
}

/// Overwrites the editable profile fields and, when given, the stored
/// resume name. Both land in one transaction.
///
/// # Errors
///
/// Returns an error if the user does not exist or the update fails.
pub fn update_profile(
    conn: &mut SqliteConnection,
    user_id: i64,
    update: &ProfileUpdate,
    resume_filename: Option<&str>,
) -> Result<(), PersistenceError> {
    debug!(user_id, resume = resume_filename.is_some(), "Updating profile");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let rows: usize = diesel::update(users::table)
            .filter(users::user_id.eq(user_id))
            .set((
                users::first_name.eq(update.first_name.trim()),
                users::last_name.eq(update.last_name.trim()),
                users::department.eq(update.department.as_deref()),
                users::location.eq(update.location.as_deref()),
                users::phone.eq(update.phone.as_deref()),
                users::skills.eq(update.skills.as_deref()),
            ))
            .execute(conn)?;
        ensure_user_updated(rows, user_id)?;

        if let Some(stored) = resume_filename {
            diesel::update(users::table)
                .filter(users::user_id.eq(user_id))
                .set(users::resume_filename.eq(stored))
                .execute(conn)?;
        }
        Ok(())
    })
}

/// Replaces the user's password hash.
///
/// # Errors
///
/// Returns an error if hashing fails, the user does not exist, or the
/// update fails.
pub fn update_password(
    conn: &mut SqliteConnection,
    user_id: i64,
    new_password: &str,
    cost: u32,
) -> Result<(), PersistenceError> {
    info!(user_id, "Updating password");

    let password_hash: String = bcrypt::hash(new_password, cost)?;
    let rows: usize = diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set(users::password_hash.eq(&password_hash))
        .execute(conn)?;
    ensure_user_updated(rows, user_id)
}
