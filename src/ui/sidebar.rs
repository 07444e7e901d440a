// SPDX-License-Identifier: MPL-2.0
//! Control column: upload, transformation choice and download.
//!
//! The sidebar owns only the text typed in the hex field. Everything it
//! displays about the image and the selection comes from the transform
//! state through [`ViewContext`]; user intents are returned as [`Event`]s.

use crate::i18n::fluent::I18n;
use crate::transform::{Action, HexColor, Transformation};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, rule, text_input, Column, Row, Space, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    hex_input: String,
}

impl State {
    #[must_use]
    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    /// Forgets the typed color; used when a new image is uploaded.
    pub fn reset(&mut self) {
        self.hex_input.clear();
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub selection: &'a Transformation,
    /// An image is uploaded, so transformations can be chosen.
    pub can_transform: bool,
    pub uploading: bool,
    pub downloading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UploadPressed,
    RestorePressed,
    RemoveBackgroundPressed,
    SwatchPicked(&'static str),
    HexInputChanged(String),
    HexSubmitted,
    DownloadPressed,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    UploadRequested,
    Select(Action),
    DownloadRequested,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UploadPressed => Event::UploadRequested,
        Message::RestorePressed => Event::Select(Action::SelectRestore),
        Message::RemoveBackgroundPressed => Event::Select(Action::SelectRemoveBackground),
        Message::SwatchPicked(value) => {
            state.hex_input = value.to_string();
            select_color(value)
        }
        Message::HexInputChanged(value) => {
            state.hex_input = value;
            Event::None
        }
        Message::HexSubmitted => select_color(&state.hex_input),
        Message::DownloadPressed => Event::DownloadRequested,
    }
}

/// Invalid input leaves the selection untouched.
fn select_color(value: &str) -> Event {
    match HexColor::from_picker(value) {
        Ok(hex) => Event::Select(Action::SelectBackgroundColor(hex)),
        Err(err) => {
            tracing::debug!(%value, error = %err, "ignoring background color");
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let upload_label = if ctx.uploading {
        i18n.tr("upload-button-busy")
    } else {
        i18n.tr("upload-button")
    };
    let upload = wide_button(upload_label, styles::button::primary)
        .on_press_maybe((!ctx.uploading).then_some(Message::UploadPressed));

    let restore = option_button(
        i18n.tr("restore-button"),
        ctx.selection.restore(),
        ctx.can_transform,
        Message::RestorePressed,
    );
    let remove_background = option_button(
        i18n.tr("remove-background-button"),
        matches!(ctx.selection, Transformation::RemoveBackground),
        ctx.can_transform,
        Message::RemoveBackgroundPressed,
    );

    let download_label = if ctx.downloading {
        i18n.tr("download-button-busy")
    } else {
        i18n.tr("download-button")
    };
    let download = wide_button(download_label, styles::button::primary).on_press_maybe(
        (ctx.can_transform && !ctx.downloading).then_some(Message::DownloadPressed),
    );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("sidebar-title")).size(typography::TITLE_MD))
        .push(upload)
        .push(rule::horizontal(1))
        .push(section_title(i18n.tr("transformations-title")))
        .push(restore)
        .push(remove_background)
        .push(background_section(&ctx))
        .push(Space::new().height(Length::Fill))
        .push(download);

    container(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn background_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.selection.background();

    let swatches = palette::BACKGROUND_SWATCHES
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &swatch| {
            let is_active = active.is_some_and(|hex| swatch.trim_start_matches('#') == hex.as_str());
            let fill = swatch_color(swatch);
            row.push(
                button(Space::new().width(Length::Fill).height(Length::Fill))
                    .width(Length::Fixed(sizing::SWATCH))
                    .height(Length::Fixed(sizing::SWATCH))
                    .style(styles::button::swatch(fill, is_active))
                    .on_press_maybe(ctx.can_transform.then_some(Message::SwatchPicked(swatch))),
            )
        });

    let mut input = text_input("#rrggbb", ctx.state.hex_input()).size(typography::BODY);
    if ctx.can_transform {
        input = input
            .on_input(Message::HexInputChanged)
            .on_submit(Message::HexSubmitted);
    }

    let apply = button(Text::new(ctx.i18n.tr("background-apply-button")).size(typography::BODY))
        .style(styles::button::unselected)
        .on_press_maybe(ctx.can_transform.then_some(Message::HexSubmitted));

    let current: Element<'a, Message> = match active {
        Some(hex) => Text::new(
            ctx.i18n
                .tr_with_args("background-current", &[("color", &hex.to_string())]),
        )
        .size(typography::CAPTION)
        .into(),
        None => Space::new().height(Length::Shrink).into(),
    };

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("background-color-title")))
        .push(swatches)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(input)
                .push(apply),
        )
        .push(current)
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::BODY).into()
}

fn wide_button<'a>(
    label: String,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> button::Button<'a, Message> {
    button(Text::new(label).size(typography::BODY).center())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(style)
}

fn option_button<'a>(
    label: String,
    selected: bool,
    enabled: bool,
    message: Message,
) -> button::Button<'a, Message> {
    let style: fn(&iced::Theme, button::Status) -> button::Style = if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    wide_button(label, style).on_press_maybe(enabled.then_some(message))
}

fn swatch_color(swatch: &str) -> Color {
    HexColor::from_picker(swatch)
        .map(|hex| {
            let (r, g, b) = hex.rgb();
            Color::from_rgb8(r, g, b)
        })
        .unwrap_or(palette::GRAY_400)
}
