// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `State`, a `Message`, an `update` that returns an `Event`
//! for the application to act on, and a `view` taking a `ViewContext`.
//!
//! - [`sidebar`] - Upload, transformation and download controls
//! - [`preview`] - Original, compare slider and side-by-side layouts
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner, compare slider)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod preview;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod widgets;
