// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

/// Marks a notification as read.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the notification does not exist.
pub fn mark_notification_read(
    conn: &mut SqliteConnection,
    notification_id: i64,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(notifications::table)
        .filter(notifications::notification_id.eq(notification_id))
        .set(notifications::is_read.eq(1))
        .execute(conn)?;
    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Notification with ID {notification_id} not found"
        )));
    }
    Ok(())
}
