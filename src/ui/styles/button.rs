// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (navbar paging, detail actions).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => {
            let is_light = !theme.extended_palette().is_dark;
            button::Style {
                background: Some(Background::Color(if is_light {
                    palette::GRAY_200
                } else {
                    palette::GRAY_700
                })),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Borderless button whose text follows the theme (close, theme toggle).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Whole-tile click target; the tile container draws the surface.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let shadow = match status {
        button::Status::Hovered => shadow::LG,
        _ => shadow::NONE,
    };

    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Heart toggle drawn over the tile picture.
///
/// Favorited tiles get a filled red heart; others an outline on a dim chip.
pub fn favorite(is_favorite: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };
        let text_color = if is_favorite {
            palette::FAVORITE_500
        } else {
            WHITE
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_style_uses_red_only_when_favorited() {
        let on = favorite(true)(&Theme::Dark, button::Status::Active);
        let off = favorite(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(on.text_color, palette::FAVORITE_500);
        assert_eq!(off.text_color, WHITE);
    }

    #[test]
    fn primary_disabled_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.shadow, shadow::NONE);
    }

    #[test]
    fn ghost_has_no_background_at_rest() {
        let style = ghost(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }
}
