// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, navbar, and
//! notifications.
//!
//! The `App` struct wires the gallery controller to localization, settings,
//! and toasts, and translates component effects into side effects like
//! settings persistence or opening a link.

pub mod config;
pub mod favorites;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::PhotoClient;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use config::Config;
use favorites::FavoritesStore;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    config: Config,
    /// Explicit settings directory; `None` uses the standard resolution.
    config_dir: Option<PathBuf>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.gallery.page())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and favorites from their standard locations and
    /// requests the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_parts(
            flags.lang,
            config,
            config_warning,
            FavoritesStore::new(),
            None,
        )
    }

    fn with_parts(
        cli_lang: Option<String>,
        config: Config,
        config_warning: Option<String>,
        favorites_store: FavoritesStore,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(cli_lang, &config);
        tracing::info!("Using locale {}", i18n.current_locale());

        let client = PhotoClient::new(
            &config.api.base_url,
            &config.api.user_agent,
            config.display.thumbnail_size(),
        );
        tracing::info!("Photo API at {}", client.endpoints().base());

        let (mut gallery, favorites_warning) = gallery::State::new(client, favorites_store);
        let task = gallery.load_page(1).map(Message::Gallery);

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, favorites_warning].into_iter().flatten() {
            notifications.push(notifications::Notification::warning(key));
        }

        let app = App {
            i18n,
            gallery,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            notifications,
        };
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = self.gallery.page().to_string();
        let page_label = self.i18n.tr_with_args("nav-page", &[("page", page.as_str())]);
        format!("{page_label} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_tick());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Only toasts consume the tick; a pending page load does not.
    fn needs_tick(&self) -> bool {
        self.notifications.has_notifications()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
            columns: usize::from(self.config.display.columns()),
        })
    }
}
