// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_bridge_domain::Notification;
use talent_bridge_persistence::Persistence;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, not_found, translate_persistence_error};
use crate::request_response::{ListNotificationsResponse, MessageResponse, NotificationInfo};

/// Lists the caller's notifications, newest first, with the unread count.
///
/// # Errors
///
/// Returns an error if a lookup fails.
pub fn list_notifications(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<ListNotificationsResponse, ApiError> {
    let notifications: Vec<Notification> = persistence
        .list_notifications(actor.user_id)
        .map_err(translate_persistence_error)?;
    let unread: i64 = persistence
        .count_unread_notifications(actor.user_id)
        .map_err(translate_persistence_error)?;

    Ok(ListNotificationsResponse {
        notifications: notifications.iter().map(NotificationInfo::from).collect(),
        unread,
    })
}

/// Marks one of the caller's notifications as read.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the notification does not exist
/// * `ApiError::Forbidden` if it belongs to someone else
pub fn mark_notification_read(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    notification_id: i64,
) -> Result<MessageResponse, ApiError> {
    let notification: Notification = persistence
        .get_notification(notification_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Notification", notification_id))?;
    AuthorizationService::authorize_read_notification(actor, &notification)?;

    persistence
        .mark_notification_read(notification_id)
        .map_err(translate_persistence_error)?;
    Ok(MessageResponse::new("Notification marked as read"))
}
