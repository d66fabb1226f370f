// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::backend::get_last_insert_rowid;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

/// Creates a session for a user.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    user_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;
    debug!(session_id, user_id, expires_at, "Session created");
    Ok(session_id)
}

/// Updates the last activity timestamp for a session.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(
            sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by token. Deleting an unknown token is not an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;
    debug!(rows, "Session deleted");
    Ok(())
}
