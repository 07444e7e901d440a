// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use cloud_lens::transform::HexColor;
    use cloud_lens::ui::design_tokens::{palette, sizing, spacing};
    use cloud_lens::ui::styles::{button, container};
    use cloud_lens::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced::widget::button::Status::Active);
            let _ = button::unselected(&theme, iced::widget::button::Status::Disabled);
            let _ = button::swatch(palette::WHITE, true)(&theme, iced::widget::button::Status::Hovered);
            let _ = container::panel(&theme);
            let _ = container::image_frame(&theme);
            let _ = container::loading_veil(&theme);
        }
    }

    #[test]
    fn swatches_are_valid_picker_values() {
        for swatch in palette::BACKGROUND_SWATCHES {
            assert!(HexColor::from_picker(swatch).is_ok(), "{swatch}");
        }
    }

    #[test]
    fn sidebar_fits_a_row_of_swatches() {
        let row = palette::BACKGROUND_SWATCHES.len() as f32 * (sizing::SWATCH + spacing::XXS);
        assert!(row < sizing::SIDEBAR_WIDTH - 2.0 * spacing::MD);
    }

    #[test]
    fn explicit_theme_modes_ignore_the_os() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
