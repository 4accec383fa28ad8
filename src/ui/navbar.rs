// SPDX-License-Identifier: MPL-2.0
//! Top bar with paging controls and the theme toggle.
//!
//! The "previous" button is disabled on page 1. Paging stays enabled while a
//! page is loading; the newest response wins.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: u32,
    /// Whether the effective theme is dark; picks the toggle label.
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PreviousPage,
    NextPage,
    ToggleTheme,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Previous => Event::PreviousPage,
        Message::Next => Event::NextPage,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

#[must_use]
pub fn can_go_back(page: u32) -> bool {
    page > 1
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = button(Text::new(ctx.i18n.tr("nav-previous")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(can_go_back(ctx.page).then_some(Message::Previous));

    let next = button(Text::new(ctx.i18n.tr("nav-next")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Next);

    let page_label = Text::new(
        ctx.i18n
            .tr_with_args("nav-page", &[("page", ctx.page.to_string().as_str())]),
    )
    .size(typography::TITLE_SM);

    let theme_key = if ctx.is_dark {
        "nav-theme-light"
    } else {
        "nav-theme-dark"
    };
    let theme_toggle = button(Text::new(ctx.i18n.tr(theme_key)).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .on_press(Message::ToggleTheme);

    let paging = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(page_label)
        .push(next);

    let row = Row::new()
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(
            Container::new(paging)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_disabled_on_first_page() {
        assert!(!can_go_back(1));
        assert!(can_go_back(2));
    }

    #[test]
    fn update_maps_messages_to_events() {
        assert_eq!(update(Message::Previous), Event::PreviousPage);
        assert_eq!(update(Message::Next), Event::NextPage);
        assert_eq!(update(Message::ToggleTheme), Event::ToggleTheme);
    }
}
