// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (upload, download).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    selected(theme, status)
}

/// Selected/active button state: the transformation currently applied.
/// Uses the brand colors so it reads the same in light and dark themes.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(is_light),
    }
}

/// Unselected/secondary button state.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled_style(is_light),
    }
}

/// Color swatch filled with `color`; outlined in brand blue when `active`.
pub fn swatch(color: Color, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (outline, width) = match (active, status) {
            (true, _) => (palette::PRIMARY_500, border::WIDTH_MD),
            (false, button::Status::Hovered) => (palette::PRIMARY_400, border::WIDTH_MD),
            (false, _) => (palette::GRAY_400, border::WIDTH_SM),
        };
        let fill = if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..color
            }
        } else {
            color
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: palette::BLACK,
            border: Border {
                color: outline,
                width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn disabled_style(is_light: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn disabled_buttons_are_grayed_out() {
        let style = selected(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        let style = unselected(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_700)));
    }

    #[test]
    fn active_swatch_is_outlined() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let active = swatch(red, true)(&Theme::Dark, button::Status::Active);
        let idle = swatch(red, false)(&Theme::Dark, button::Status::Active);

        assert_eq!(active.border.color, palette::PRIMARY_500);
        assert!(active.border.width > idle.border.width);
        assert_eq!(active.background, Some(Background::Color(red)));
    }
}
