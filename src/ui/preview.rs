// SPDX-License-Identifier: MPL-2.0
//! Preview area: the original image alone, the compare slider, or the
//! original and transformed images side by side.
//!
//! Which of these is shown is decided by [`Layout`], derived from the
//! transform state. This module only holds what is needed to draw: the
//! fetched image handles, the divider position and the spinner angle.

use crate::i18n::fluent::I18n;
use crate::transform::Layout;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner, CompareSlider};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, slider, Column, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use image_rs::ImageReader;
use std::io::Cursor;

/// Content of one image slot.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Empty,
    Loading,
    Ready {
        handle: Handle,
        /// Pixel size read from the image header, when it could be read.
        dimensions: Option<(u32, u32)>,
    },
    Failed,
}

impl Slot {
    /// Slot for freshly fetched image bytes.
    ///
    /// Only the header is inspected for the pixel size; decoding is left to
    /// the renderer.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let dimensions = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok());

        Slot::Ready {
            handle: Handle::from_bytes(bytes),
            dimensions,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Slot::Loading)
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Slot::Ready { handle, .. } => Some(handle),
            _ => None,
        }
    }

    /// Width / height of the fetched image.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        match self {
            Slot::Ready {
                dimensions: Some((width, height)),
                ..
            } if *width > 0 && *height > 0 => Some(*width as f32 / *height as f32),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    original: Slot,
    transformed: Slot,
    slider_position: f32,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(slider_position: f32) -> Self {
        Self {
            original: Slot::Empty,
            transformed: Slot::Empty,
            slider_position: slider_position.clamp(0.0, 1.0),
            spinner_rotation: 0.0,
        }
    }

    /// Drops both images; used when a new upload starts.
    pub fn clear(&mut self) {
        self.original = Slot::Empty;
        self.transformed = Slot::Empty;
    }

    pub fn set_original(&mut self, slot: Slot) {
        self.original = slot;
    }

    pub fn set_transformed(&mut self, slot: Slot) {
        self.transformed = slot;
    }

    #[must_use]
    pub fn original(&self) -> &Slot {
        &self.original
    }

    #[must_use]
    pub fn transformed(&self) -> &Slot {
        &self.transformed
    }

    #[must_use]
    pub fn slider_position(&self) -> f32 {
        self.slider_position
    }

    /// Aspect ratio of the delivered original preview.
    ///
    /// This is what the service actually returned, so both compare layouts
    /// draw the same shape.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.original.aspect_ratio()
    }

    /// Whether a spinner is on screen and needs animation ticks.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.original.is_loading() || self.transformed.is_loading()
    }

    pub fn tick(&mut self) {
        self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub layout: Layout,
    /// Width / height of the uploaded image, used until a preview reports
    /// its own size.
    pub aspect_ratio: f32,
    pub can_toggle_compare: bool,
    pub uploading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SliderMoved(f32),
    ToggleCompare,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    ToggleCompare,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SliderMoved(position) => {
            state.slider_position = position.clamp(0.0, 1.0);
            Event::None
        }
        Message::ToggleCompare => Event::ToggleCompare,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.layout {
        Layout::Empty => empty_view(&ctx),
        Layout::Original => labeled_slot(
            ctx.i18n.tr("original-title"),
            &ctx.state.original,
            ctx.state.spinner_rotation,
            ctx.i18n,
        ),
        Layout::Slider => match (ctx.state.original.handle(), ctx.state.transformed.handle()) {
            (Some(original), Some(transformed)) => slider_view(&ctx, original, transformed),
            _ => side_by_side(&ctx),
        },
        Layout::SideBySide { .. } => side_by_side(&ctx),
    };

    let mut content = Column::new().spacing(spacing::SM).padding(spacing::MD);
    if matches!(ctx.layout, Layout::Slider | Layout::SideBySide { .. }) {
        content = content.push(compare_toggle(&ctx));
    }

    content.push(body).width(Length::Fill).height(Length::Fill).into()
}

/// Button label names the layout the button switches to.
fn compare_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if matches!(ctx.layout, Layout::Slider) {
        ctx.i18n.tr("compare-side-by-side")
    } else {
        ctx.i18n.tr("compare-slider")
    };

    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(label).size(typography::BODY))
                .style(styles::button::unselected)
                .on_press_maybe(ctx.can_toggle_compare.then_some(Message::ToggleCompare)),
        )
        .into()
}

fn empty_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = if ctx.uploading {
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, ctx.state.spinner_rotation).into_element())
            .push(Text::new(ctx.i18n.tr("upload-in-progress")).size(typography::BODY))
            .into()
    } else {
        Text::new(ctx.i18n.tr("empty-state-hint"))
            .size(typography::BODY)
            .into()
    };

    container(content).center(Length::Fill).into()
}

fn slider_view<'a>(
    ctx: &ViewContext<'a>,
    original: &Handle,
    transformed: &Handle,
) -> Element<'a, Message> {
    let position = ctx.state.slider_position;
    let compare = CompareSlider::new(
        original.clone(),
        transformed.clone(),
        ctx.state.aspect_ratio().unwrap_or(ctx.aspect_ratio),
        position,
        Message::SliderMoved,
    )
    .into_element();

    Column::new()
        .spacing(spacing::XS)
        .push(
            container(compare)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXS)
                .style(styles::container::image_frame),
        )
        .push(slider(0.0..=1.0, position, Message::SliderMoved).step(0.01))
        .into()
}

fn side_by_side<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(labeled_slot(
            ctx.i18n.tr("original-title"),
            &ctx.state.original,
            ctx.state.spinner_rotation,
            ctx.i18n,
        ))
        .push(labeled_slot(
            ctx.i18n.tr("transformed-title"),
            &ctx.state.transformed,
            ctx.state.spinner_rotation,
            ctx.i18n,
        ))
        .height(Length::Fill)
        .into()
}

fn labeled_slot<'a>(
    title: String,
    slot: &Slot,
    rotation: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Text::new(title).size(typography::BODY))
        .push(slot_view(slot, rotation, i18n))
        .into()
}

fn slot_view<'a>(slot: &Slot, rotation: f32, i18n: &I18n) -> Element<'a, Message> {
    match slot {
        Slot::Ready { handle, .. } => container(
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::image_frame)
        .into(),
        Slot::Loading => container(AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element())
            .center(Length::Fill)
            .style(styles::container::loading_veil)
            .into(),
        Slot::Failed => container(Text::new(i18n.tr("preview-failed")).size(typography::BODY))
            .center(Length::Fill)
            .style(styles::container::image_frame)
            .into(),
        Slot::Empty => container(Space::new())
            .center(Length::Fill)
            .style(styles::container::image_frame)
            .into(),
    }
}
