// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes top-level messages and applies component effects.

use super::Message;
use crate::config::{self, Config};
use crate::ui::gallery::{self, component::PAGE_LOAD_ERROR_KEY, Effect as GalleryEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

const OPEN_LINK_ERROR_KEY: &str = "notification-open-link-error";

/// Mutable view of the `App` fields the handlers touch.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    /// `None` resolves the config directory the usual way.
    pub config_dir: Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            ctx.notifications.tick();
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);

    match effect {
        GalleryEffect::None => {}
        GalleryEffect::ShowWarning(key) => {
            ctx.notifications.push(Notification::warning(key));
        }
        GalleryEffect::PageRecovered => {
            ctx.notifications.dismiss_key(PAGE_LOAD_ERROR_KEY);
        }
        GalleryEffect::OpenUrl(url) => {
            if let Err(err) = open::that_detached(&url) {
                report_open_failure(ctx.notifications, &url, &err);
            }
        }
    }

    task.map(Message::Gallery)
}

/// Error toast; stays until the user closes it.
fn report_open_failure(notifications: &mut notifications::Manager, url: &str, err: &std::io::Error) {
    tracing::error!("Cannot open {} in a browser: {}", url, err);
    notifications.push(Notification::error(OPEN_LINK_ERROR_KEY));
}

fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::PreviousPage => ctx.gallery.prev_page().map(Message::Gallery),
        NavbarEvent::NextPage => ctx.gallery.next_page().map(Message::Gallery),
        NavbarEvent::ToggleTheme => {
            toggle_theme(ctx);
            Task::none()
        }
    }
}

/// Switches to the explicit opposite of the effective theme and persists it.
fn toggle_theme(ctx: &mut UpdateContext<'_>) {
    let mode = ctx.theme_mode.toggled();
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;

    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        tracing::warn!("Cannot save settings: {}", err);
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
