//! Notifications page

use std::sync::Arc;

use shared::models::{Notification, NotificationKind, ReadStatus};

use crate::api::{notifications, ApiClient};
use crate::session::Route;

use super::Toast;

pub struct NotificationsPage {
    api: Arc<ApiClient>,
    pub notifications: Vec<Notification>,
}

impl NotificationsPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            notifications: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Option<Toast> {
        match notifications::list(&self.api).await {
            Ok(list) => {
                self.notifications = list;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "notification fetch failed");
                Some(Toast::error("Failed to load notifications"))
            }
        }
    }

    pub fn unread_count(&self) -> usize {
        shared::models::unread_count(&self.notifications)
    }

    /// A notification was clicked: mark it read (the transition is
    /// one-directional, reads stay read) and hand back where to navigate
    pub async fn open(&mut self, id: &str) -> Option<Route> {
        let position = self.notifications.iter().position(|n| n.id == id)?;
        let (is_unread, kind, related_inward) = {
            let notification = &self.notifications[position];
            (
                notification.is_unread(),
                notification.kind,
                notification.related_inward.clone(),
            )
        };

        if is_unread {
            match notifications::mark_read(&self.api, id).await {
                Ok(()) => self.notifications[position].status = ReadStatus::Read,
                Err(err) => tracing::warn!(error = %err, "mark read failed"),
            }
        }

        match kind {
            NotificationKind::Discrepancy | NotificationKind::Rejection => {
                related_inward.map(Route::DiscrepancyDetail)
            }
            NotificationKind::Inward | NotificationKind::Outward => None,
        }
    }
}
