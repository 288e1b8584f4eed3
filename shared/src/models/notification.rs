//! Notification models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a notification is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Discrepancy,
    Rejection,
    Inward,
    Outward,
}

/// Read state of a notification; the unread -> read transition is
/// one-directional
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Unread,
    Read,
}

/// A notification row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "relatedInward", default)]
    pub related_inward: Option<String>,
    #[serde(rename = "relatedOutward", default)]
    pub related_outward: Option<String>,
    pub status: ReadStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == ReadStatus::Unread
    }
}

/// Count of unread notifications in an already-fetched list
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.is_unread()).count()
}
