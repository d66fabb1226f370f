// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use talent_bridge_domain::Notification;

use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

/// Diesel Queryable struct for notification rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = notifications)]
struct NotificationRow {
    notification_id: i64,
    user_id: i64,
    title: String,
    message: String,
    is_read: i32,
    created_at: String,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            notification_id: row.notification_id,
            user_id: row.user_id,
            title: row.title,
            message: row.message,
            is_read: row.is_read != 0,
            created_at: row.created_at,
        }
    }
}

/// Retrieves a notification by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_notification(
    conn: &mut SqliteConnection,
    notification_id: i64,
) -> Result<Option<Notification>, PersistenceError> {
    Ok(notifications::table
        .filter(notifications::notification_id.eq(notification_id))
        .select(NotificationRow::as_select())
        .first::<NotificationRow>(conn)
        .optional()?
        .map(Notification::from))
}

/// Lists a user's notifications, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_notifications(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<Notification>, PersistenceError> {
    Ok(notifications::table
        .filter(notifications::user_id.eq(user_id))
        .select(NotificationRow::as_select())
        .order((
            notifications::created_at.desc(),
            notifications::notification_id.desc(),
        ))
        .load::<NotificationRow>(conn)?
        .into_iter()
        .map(Notification::from)
        .collect())
}

/// Counts a user's unread notifications.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_unread(conn: &mut SqliteConnection, user_id: i64) -> Result<i64, PersistenceError> {
    Ok(notifications::table
        .filter(notifications::user_id.eq(user_id))
        .filter(notifications::is_read.eq(0))
        .count()
        .get_result(conn)?)
}
