// SPDX-License-Identifier: MPL-2.0
//! Modal card with the selected image's metadata.

use super::component::Message;
use crate::api::ImageDetail;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Full-window layer: dimmed backdrop with the card centered on it.
///
/// The layer swallows all input below it; clicking the backdrop dismisses.
pub fn view<'a>(detail: &'a ImageDetail, i18n: &'a I18n) -> Element<'a, Message> {
    let backdrop = center(opaque(card(detail, i18n))).style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::DismissDetail))
}

fn card<'a>(detail: &'a ImageDetail, i18n: &'a I18n) -> Element<'a, Message> {
    let width = detail.width.to_string();
    let height = detail.height.to_string();

    let title = Text::new(i18n.tr("detail-title")).size(typography::TITLE_MD);
    let author = Text::new(
        i18n.tr_with_args("detail-author", &[("author", detail.author.as_str())]),
    )
    .size(typography::BODY);
    let dimensions = Text::new(i18n.tr_with_args(
        "detail-dimensions",
        &[("width", width.as_str()), ("height", height.as_str())],
    ))
    .size(typography::BODY);
    let url = Text::new(i18n.tr_with_args("detail-url", &[("url", detail.url.as_str())]))
        .size(typography::CAPTION);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("detail-open")))
                .on_press(Message::OpenDetailLink)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("detail-close")))
                .on_press(Message::DismissDetail)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::ghost),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(author)
        .push(dimensions)
        .push(url)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DETAIL_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
