use std::collections::VecDeque;
use crate::models::Notification;

/// Default number of toasts kept on screen
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 1;

/// Transient toast queue, newest first
///
/// Pushing beyond `limit` drops the oldest toast.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    queue: VecDeque<Notification>,
    limit: usize,
}

impl NotificationCenter {
    pub fn new(limit: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(limit),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!("Notification: {} - {}", notification.title, notification.description);
        self.queue.push_front(notification);
        self.queue.truncate(self.limit);
    }

    pub fn dismiss_all(&mut self) {
        self.queue.clear();
    }

    pub fn active(&self) -> Vec<Notification> {
        self.queue.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_LIMIT)
    }
}
