// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for recoverable problems.
//!
//! Warnings from loading settings or favorites, failed saves, and failed page
//! loads surface here instead of blocking the gallery.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` for the visible list, queue, and auto-dismiss
//! - [`toast`] - rendering, bottom-right corner, newest first
//!
//! At most three toasts show at once; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
