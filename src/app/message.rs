// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for `favorites.json`).
    /// Takes precedence over `ICED_GALLERY_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
