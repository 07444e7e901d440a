// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::transform::{Generation, ImageDescriptor};
use crate::ui::notifications;
use crate::ui::{preview, sidebar};
use std::path::PathBuf;
use std::time::Instant;

/// Which preview slot a fetch result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSlot {
    Original,
    Transformed,
}

/// Top-level messages consumed by `App::update`.
///
/// Every async completion carries the [`Generation`] it was started
/// against so results that arrive after the image or the selection changed
/// can be recognised and dropped.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the open file dialog.
    UploadFileChosen(Option<PathBuf>),
    UploadCompleted {
        generation: Generation,
        result: Result<ImageDescriptor, Error>,
    },
    PreviewFetched {
        generation: Generation,
        slot: PreviewSlot,
        result: Result<Vec<u8>, Error>,
    },
    DownloadFetched {
        generation: Generation,
        result: Result<Vec<u8>, Error>,
    },
    DownloadSaved(Result<PathBuf, Error>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Spinner animation and notification timers.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to upload on startup.
    pub file_path: Option<String>,
    /// Takes precedence over `CLOUD_LENS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `CLOUD_LENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
