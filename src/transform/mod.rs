// SPDX-License-Identifier: MPL-2.0
//! State of the image transform view: what was uploaded, which hosted
//! transformation is selected, and how the comparison is displayed.
//!
//! This module has no UI or network code. The application feeds it
//! [`Action`]s and reads back the resulting [`State`].

mod descriptor;
mod selection;
mod state;

pub use descriptor::ImageDescriptor;
pub use selection::{HexColor, Transformation};
pub use state::{reduce, Action, Generation, Layout, State, ViewState};
