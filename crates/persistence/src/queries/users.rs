// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use talent_bridge_domain::{Role, User};
use tracing::debug;

use crate::data_models::UserCredentials;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    user_id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    first_name: String,
    last_name: String,
    department: Option<String>,
    location: Option<String>,
    skills: Option<String>,
    phone: Option<String>,
    resume_filename: Option<String>,
    created_at: String,
}

impl UserRow {
    fn into_credentials(self) -> Result<UserCredentials, PersistenceError> {
        let role: Role = self.role.parse()?;
        Ok(UserCredentials {
            user: User {
                user_id: self.user_id,
                username: self.username,
                email: self.email,
                role,
                first_name: self.first_name,
                last_name: self.last_name,
                department: self.department,
                location: self.location,
                skills: self.skills,
                phone: self.phone,
                resume_filename: self.resume_filename,
                created_at: self.created_at,
            },
            password_hash: self.password_hash,
        })
    }
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserCredentials>, PersistenceError> {
    debug!(user_id, "Looking up user by ID");

    users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(UserRow::into_credentials)
        .transpose()
}

/// Retrieves a user whose username or email matches `login`.
///
/// Both columns compare case-insensitively.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_user_by_login(
    conn: &mut SqliteConnection,
    login: &str,
) -> Result<Option<UserCredentials>, PersistenceError> {
    let login: &str = login.trim();
    debug!(login, "Looking up user by username or email");

    users::table
        .filter(users::username.eq(login).or(users::email.eq(login)))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(UserRow::into_credentials)
        .transpose()
}

/// Returns true if the username is taken.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn username_exists(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<bool, PersistenceError> {
    let count: i64 = users::table
        .filter(users::username.eq(username.trim()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Returns true if the email address is registered.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn email_exists(conn: &mut SqliteConnection, email: &str) -> Result<bool, PersistenceError> {
    let count: i64 = users::table
        .filter(users::email.eq(email.trim()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
