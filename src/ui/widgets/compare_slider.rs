// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison: two images stacked with a draggable divider.
//!
//! The first image fills the area left of the divider, the second the area
//! right of it. Both are drawn into the same rectangle, fitted to the canvas
//! with the aspect ratio of the uploaded image.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::widget::Action;
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

pub struct CompareSlider<Message> {
    first: Handle,
    second: Handle,
    aspect_ratio: f32,
    position: f32,
    on_change: fn(f32) -> Message,
}

impl<Message: 'static> CompareSlider<Message> {
    /// `position` is the divider location, 0.0 (left edge) to 1.0 (right edge).
    pub fn new(
        first: Handle,
        second: Handle,
        aspect_ratio: f32,
        position: f32,
        on_change: fn(f32) -> Message,
    ) -> Self {
        Self {
            first,
            second,
            aspect_ratio,
            position: position.clamp(0.0, 1.0),
            on_change,
        }
    }

    pub fn into_element(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn position_at(&self, point: Point, size: Size) -> f32 {
        let area = fitted(size, self.aspect_ratio);
        if area.width <= 0.0 {
            return self.position;
        }
        ((point.x - area.x) / area.width).clamp(0.0, 1.0)
    }
}

/// Largest rectangle with `aspect_ratio` (width / height) centered in `size`.
#[must_use]
pub fn fitted(size: Size, aspect_ratio: f32) -> Rectangle {
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) || size.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, size);
    }

    let (width, height) = if size.width / size.height > aspect_ratio {
        (size.height * aspect_ratio, size.height)
    } else {
        (size.width, size.width / aspect_ratio)
    };

    Rectangle {
        x: (size.width - width) / 2.0,
        y: (size.height - height) / 2.0,
        width,
        height,
    }
}

impl<Message: 'static> canvas::Program<Message> for CompareSlider<Message> {
    /// Whether the divider is being dragged.
    type State = bool;

    fn update(
        &self,
        dragging: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                *dragging = true;
                Some(
                    Action::publish((self.on_change)(self.position_at(position, bounds.size())))
                        .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if *dragging => {
                let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                Some(
                    Action::publish((self.on_change)(self.position_at(local, bounds.size())))
                        .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if *dragging => {
                *dragging = false;
                Some(Action::capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _dragging: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = fitted(bounds.size(), self.aspect_ratio);
        let split = area.x + area.width * self.position;

        frame.draw_image(area, canvas::Image::new(self.first.clone()));

        let right = Rectangle {
            x: split,
            y: area.y,
            width: area.x + area.width - split,
            height: area.height,
        };
        if right.width > 0.0 {
            // Clipped frames use coordinates relative to the clip region.
            frame.with_clip(right, |frame| {
                let shifted = Rectangle {
                    x: area.x - right.x,
                    y: 0.0,
                    ..area
                };
                frame.draw_image(shifted, canvas::Image::new(self.second.clone()));
            });
        }

        frame.stroke(
            &Path::line(
                Point::new(split, area.y),
                Point::new(split, area.y + area.height),
            ),
            Stroke::default()
                .with_width(sizing::DIVIDER_WIDTH)
                .with_color(palette::WHITE),
        );
        frame.fill(
            &Path::circle(Point::new(split, area.center_y()), sizing::DIVIDER_GRIP),
            palette::WHITE,
        );
        frame.stroke(
            &Path::circle(Point::new(split, area.center_y()), sizing::DIVIDER_GRIP),
            Stroke::default()
                .with_width(sizing::DIVIDER_WIDTH)
                .with_color(palette::GRAY_400),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        dragging: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if *dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}
