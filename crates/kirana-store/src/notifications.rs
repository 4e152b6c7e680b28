//! # Notifications Module: The Bounded Feed
//!
//! A fixed-size, newest-first log of operational notifications. The feed
//! is for the shopkeeper, not for ops: it answers "what happened in my
//! shop today", so it keeps the latest 50 entries and silently drops the
//! rest. `tracing` is the unbounded channel; this one is the human one.

use kirana_core::types::Notification;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of notifications retained.
pub const NOTIFICATION_RETENTION: usize = 50;

/// Newest-first notification feed, truncated to
/// [`NOTIFICATION_RETENTION`] on every insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
}

impl NotificationLog {
    /// Creates an empty feed.
    pub fn new() -> Self {
        NotificationLog::default()
    }

    /// Prepends a notification, dropping the oldest entry past the cap.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push_front(notification);
        self.entries.truncate(NOTIFICATION_RETENTION);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has happened yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a NotificationLog {
    type Item = &'a Notification;
    type IntoIter = std::collections::vec_deque::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
