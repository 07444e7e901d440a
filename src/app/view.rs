// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: sidebar on the left, preview area on the right, toasts
//! stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::transform;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{preview, sidebar};
use iced::widget::{Row, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub transform: &'a transform::State,
    pub sidebar: &'a sidebar::State,
    pub preview: &'a preview::State,
    pub notifications: &'a Manager,
    pub uploading: bool,
    pub downloading: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sidebar = sidebar::view(sidebar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.sidebar,
        selection: ctx.transform.selection(),
        can_transform: ctx.transform.can_transform(),
        uploading: ctx.uploading,
        downloading: ctx.downloading,
    })
    .map(Message::Sidebar);

    let preview = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        state: ctx.preview,
        layout: ctx.transform.layout(),
        aspect_ratio: aspect_ratio(ctx.transform),
        can_toggle_compare: ctx.transform.can_toggle_compare(),
        uploading: ctx.uploading,
    })
    .map(Message::Preview);

    let main = Row::new()
        .push(sidebar)
        .push(preview)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(main)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Width / height of the uploaded image, square when unknown.
fn aspect_ratio(state: &transform::State) -> f32 {
    match state.descriptor() {
        Some(descriptor) if descriptor.width > 0 && descriptor.height > 0 => {
            descriptor.width as f32 / descriptor.height as f32
        }
        _ => 1.0,
    }
}
