// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: visible list, overflow queue, auto-dismiss.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    ///
    /// A key already on screen or waiting is not shown twice, so repeated
    /// failures of the same kind collapse into one toast.
    pub fn push(&mut self, notification: Notification) {
        let key = notification.message_key();
        if self
            .visible
            .iter()
            .chain(self.queue.iter())
            .any(|existing| existing.message_key() == key)
        {
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every notification with `message_key`, e.g. a page-load
    /// warning once a later page load succeeds.
    pub fn dismiss_key(&mut self, message_key: &str) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.message_key() != message_key);
        self.queue.retain(|n| n.message_key() != message_key);

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    /// Drops expired toasts. Driven by the 100 ms tick subscription.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}
