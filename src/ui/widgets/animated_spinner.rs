// SPDX-License-Identifier: MPL-2.0
//! Rotating arc drawn over an image slot that is still loading.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians the arc advances per animation tick.
pub const ROTATION_STEP: f32 = 0.15;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(3.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Half-circle arc starting at 12 o'clock, offset by the rotation.
        let start_angle = self.rotation - PI / 2.0;
        let segments = 30_u16;
        let mut arc = canvas::path::Builder::new();
        for i in 0..=segments {
            let angle = start_angle + PI * f32::from(i) / f32::from(segments);
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if i == 0 {
                arc.move_to(point);
            } else {
                arc.line_to(point);
            }
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_full_turn() {
        let rotation = advance(TAU - ROTATION_STEP / 2.0);
        assert!(rotation < ROTATION_STEP);
        assert!(rotation >= 0.0);
    }

    #[test]
    fn advance_moves_forward() {
        assert!((advance(0.0) - ROTATION_STEP).abs() < f32::EPSILON);
    }
}
