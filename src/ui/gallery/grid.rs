// SPDX-License-Identifier: MPL-2.0
//! Grid presenter: turns a page of images into tiles.
//!
//! Rendering is a pure function of the context; clicks are forwarded as
//! gallery [`Message`]s and never change state here.

use super::component::Message;
use crate::api::ImageSummary;
use crate::app::favorites::FavoriteSet;
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, container, scrollable, stack, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

const HEART_FILLED: &str = "♥";
const HEART_OUTLINE: &str = "♡";

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageSummary],
    pub loading: bool,
    /// Reason the latest page request failed; the previous tiles stay.
    pub error: Option<&'a ApiError>,
    pub favorites: &'a FavoriteSet,
    pub thumbnails: &'a HashMap<u32, Handle>,
    /// Tiles per row, at least 1.
    pub columns: usize,
}

/// What the grid shows, before any widget is built.
#[derive(Debug, PartialEq, Eq)]
pub enum Layout<'a> {
    Loading,
    Empty,
    Rows(Vec<&'a [ImageSummary]>),
}

impl Layout<'_> {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        match self {
            Layout::Loading | Layout::Empty => 0,
            Layout::Rows(rows) => rows.iter().map(|row| row.len()).sum(),
        }
    }
}

/// Splits `images` into rows of `columns` tiles; loading hides every tile.
#[must_use]
pub fn layout(images: &[ImageSummary], loading: bool, columns: usize) -> Layout<'_> {
    if loading {
        Layout::Loading
    } else if images.is_empty() {
        Layout::Empty
    } else {
        Layout::Rows(images.chunks(columns.max(1)).collect())
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let rows = match layout(ctx.images, ctx.loading, ctx.columns) {
        Layout::Loading => return centered_label(ctx.i18n.tr("gallery-loading")),
        Layout::Empty => {
            let label = match ctx.error {
                Some(error) => error_text(ctx.i18n, error),
                None => ctx.i18n.tr("gallery-empty"),
            };
            return centered_label(label);
        }
        Layout::Rows(rows) => rows,
    };

    let columns = ctx.columns.max(1);
    let mut grid = Column::new().spacing(spacing::MD).padding(spacing::MD);
    if let Some(error) = ctx.error {
        grid = grid.push(error_banner(ctx.i18n, error));
    }
    for row in rows {
        let mut tiles = Row::new().spacing(spacing::MD);
        for summary in row {
            tiles = tiles.push(tile(&ctx, summary));
        }
        // Keep tile widths equal on a short last row.
        for _ in row.len()..columns {
            tiles = tiles.push(Container::new(text("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(tiles);
    }

    scrollable(grid).height(Length::Fill).into()
}

fn tile<'a>(ctx: &ViewContext<'a>, summary: &'a ImageSummary) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnails.get(&summary.id) {
        Some(handle) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(summary.author.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    let is_favorite = ctx.favorites.contains(summary.id);
    let (glyph, label_key) = if is_favorite {
        (HEART_FILLED, "gallery-favorite-remove")
    } else {
        (HEART_OUTLINE, "gallery-favorite-add")
    };
    let heart = button(
        Text::new(glyph)
            .size(typography::ICON)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::ToggleFavorite(summary.id))
    .width(Length::Fixed(sizing::FAVORITE_BUTTON))
    .height(Length::Fixed(sizing::FAVORITE_BUTTON))
    .style(styles::button::favorite(is_favorite));
    let heart = iced::widget::tooltip(
        heart,
        Container::new(Text::new(ctx.i18n.tr(label_key)).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        iced::widget::tooltip::Position::Bottom,
    );

    let heart_layer = Container::new(heart)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::XS);

    let caption = Text::new(ctx.i18n.tr_with_args(
        "gallery-photo-by",
        &[("author", summary.author.as_str())],
    ))
    .size(typography::CAPTION);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(stack![picture, heart_layer])
        .push(caption);

    let card = Container::new(body)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::tile);

    button(card)
        .on_press(Message::ImageClicked(summary.id))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::tile)
        .into()
}

fn error_text(i18n: &I18n, error: &ApiError) -> String {
    format!(
        "{} {}",
        i18n.tr("notification-page-load-error"),
        i18n.tr(error.i18n_key())
    )
}

fn error_banner<'a>(i18n: &I18n, error: &ApiError) -> Element<'a, Message> {
    Container::new(Text::new(error_text(i18n, error)).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::error_banner)
        .into()
}

fn centered_label<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
