// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, detail, grid};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
    pub columns: usize,
}

/// Navbar over the grid, then the detail card and toasts on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        page: ctx.gallery.page(),
        is_dark: ctx.theme_mode.is_dark(),
    })
    .map(Message::Navbar);

    let grid_view = grid::view(grid::ViewContext {
        i18n: ctx.i18n,
        images: ctx.gallery.images(),
        loading: ctx.gallery.is_loading(),
        error: ctx.gallery.last_error(),
        favorites: ctx.gallery.favorites(),
        thumbnails: ctx.gallery.thumbnails(),
        columns: ctx.columns,
    })
    .map(Message::Gallery);

    let base = Column::new()
        .push(navbar_view)
        .push(grid_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(selected) = ctx.gallery.selected_detail() {
        layers = layers.push(detail::view(selected, ctx.i18n).map(Message::Gallery));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
