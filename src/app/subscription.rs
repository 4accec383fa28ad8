// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard shortcuts to the gallery.
///
/// Events already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                shortcut(&key).map(Message::Gallery)
            }
            _ => None,
        }
    })
}

/// `Left`/`Right` page through the gallery, `Escape` closes the detail card.
pub fn shortcut(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::PreviousPage),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::NextPage),
        Key::Named(Named::Escape) => Some(gallery::Message::DismissDetail),
        _ => None,
    }
}

/// Ticks every 100 ms while toasts are waiting to auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
