// SPDX-License-Identifier: MPL-2.0
//! Reducer for the image transform view.
//!
//! Every user interaction and every async completion is expressed as an
//! [`Action`] and folded into a new [`State`] by [`reduce`]. The reducer is
//! pure: it performs no I/O and never reads the clock, so each transition can
//! be tested on its own.
//!
//! Two rules are enforced here rather than at call sites:
//! - changing the selection always clears `transformed_image_loaded`;
//! - async results carry the [`Generation`] they were issued against and are
//!   ignored once the state has moved on.

use super::descriptor::ImageDescriptor;
use super::selection::{HexColor, Transformation};

/// Version token identifying which descriptor and selection an async
/// operation was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation {
    descriptor: u64,
    selection: u64,
}

impl Generation {
    /// Whether both tokens were issued for the same uploaded image,
    /// regardless of the selection.
    #[must_use]
    pub fn same_descriptor(&self, other: &Generation) -> bool {
        self.descriptor == other.descriptor
    }

    fn next_descriptor(self) -> Self {
        Self {
            descriptor: self.descriptor.wrapping_add(1),
            selection: self.selection.wrapping_add(1),
        }
    }

    fn next_selection(self) -> Self {
        Self {
            descriptor: self.descriptor,
            selection: self.selection.wrapping_add(1),
        }
    }
}

/// Display-only flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// The transformed image for the current selection has finished loading.
    pub transformed_image_loaded: bool,
    /// Slider overlay when `true`, side by side when `false`.
    pub compare_mode: bool,
}

/// What the main area should render for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Nothing uploaded yet.
    Empty,
    /// No transformation selected: the original alone.
    Original,
    /// Original and transformed stacked behind a draggable divider.
    Slider,
    /// Original and transformed next to each other.
    SideBySide {
        /// Show the loading placeholder over the transformed slot.
        transformed_loading: bool,
    },
}

/// Everything the transform view knows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    descriptor: Option<ImageDescriptor>,
    selection: Transformation,
    view: ViewState,
    generation: Generation,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user is about to pick a new image; stale state is cleared eagerly.
    UploadStarted,
    /// The hosted service accepted an upload.
    UploadSucceeded(ImageDescriptor),
    SelectRestore,
    SelectRemoveBackground,
    SelectBackgroundColor(HexColor),
    ToggleCompareMode,
    /// The transformed preview issued for `Generation` finished loading.
    TransformedLoaded(Generation),
}

/// Folds `action` into `state`.
#[must_use]
pub fn reduce(state: State, action: Action) -> State {
    match action {
        Action::UploadStarted => State {
            descriptor: None,
            selection: Transformation::None,
            view: ViewState::default(),
            generation: state.generation.next_descriptor(),
        },
        Action::UploadSucceeded(descriptor) => State {
            descriptor: Some(descriptor),
            selection: Transformation::None,
            view: ViewState::default(),
            generation: state.generation.next_descriptor(),
        },
        Action::SelectRestore => state.with_selection(Transformation::Restore),
        Action::SelectRemoveBackground => state.with_selection(Transformation::RemoveBackground),
        Action::SelectBackgroundColor(color) => {
            state.with_selection(Transformation::BackgroundColor(color))
        }
        Action::ToggleCompareMode => {
            if state.can_toggle_compare() {
                let mut next = state;
                next.view.compare_mode = !next.view.compare_mode;
                next
            } else {
                state
            }
        }
        Action::TransformedLoaded(token) => {
            if token == state.generation
                && state.descriptor.is_some()
                && state.selection.is_active()
            {
                let mut next = state;
                next.view.transformed_image_loaded = true;
                next
            } else {
                state
            }
        }
    }
}

impl State {
    /// Replaces the whole selection; the loaded flag always follows.
    fn with_selection(self, selection: Transformation) -> Self {
        if self.descriptor.is_none() {
            return self;
        }
        Self {
            selection,
            view: ViewState {
                transformed_image_loaded: false,
                ..self.view
            },
            generation: self.generation.next_selection(),
            ..self
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> Option<&ImageDescriptor> {
        self.descriptor.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &Transformation {
        &self.selection
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Transformation buttons are enabled once an image is uploaded.
    #[must_use]
    pub fn can_transform(&self) -> bool {
        self.descriptor.is_some()
    }

    /// The compare toggle is only enabled when there is something loaded to compare.
    #[must_use]
    pub fn can_toggle_compare(&self) -> bool {
        self.descriptor.is_some()
            && self.selection.is_active()
            && self.view.transformed_image_loaded
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        if self.descriptor.is_none() {
            Layout::Empty
        } else if !self.selection.is_active() {
            Layout::Original
        } else if self.view.compare_mode {
            Layout::Slider
        } else {
            Layout::SideBySide {
                transformed_loading: !self.view.transformed_image_loaded,
            }
        }
    }
}
