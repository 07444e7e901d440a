// SPDX-License-Identifier: MPL-2.0
//! Message handlers and the async tasks they start.
//!
//! Every handler works on an [`UpdateContext`] borrowed from `App`. Transform
//! state changes go through [`crate::transform::reduce`]; the handlers only
//! decide which actions to dispatch and which requests to send.

use super::message::{Message, PreviewSlot};
use super::persisted_state::AppState;
use crate::cloud::{build_url, download, CloudClient};
use crate::config::Config;
use crate::error::Error;
use crate::transform::{self, Action, Generation, ImageDescriptor};
use crate::ui::notifications::{self, Notification};
use crate::ui::preview::{self, Slot};
use crate::ui::sidebar;
use iced::Task;
use std::path::PathBuf;

/// Extensions offered by the open dialog.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff",
];

pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub client: &'a Result<CloudClient, Error>,
    pub transform: &'a mut transform::State,
    pub sidebar: &'a mut sidebar::State,
    pub preview: &'a mut preview::State,
    /// Generation of the upload in flight, if any.
    pub pending_upload: &'a mut Option<Generation>,
    pub downloading: &'a mut bool,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

fn dispatch(ctx: &mut UpdateContext<'_>, action: Action) {
    let state = std::mem::take(ctx.transform);
    *ctx.transform = transform::reduce(state, action);
}

/// Returns a client for a new request, or reports why there is none.
fn cloud_client(ctx: &mut UpdateContext<'_>) -> Option<CloudClient> {
    match ctx.client {
        Ok(client) => Some(client.clone()),
        Err(err) => {
            ctx.notifications.push(Notification::from_error(err));
            None
        }
    }
}

// =============================================================================
// Component messages
// =============================================================================

pub fn handle_sidebar_message(ctx: &mut UpdateContext<'_>, message: sidebar::Message) -> Task<Message> {
    match sidebar::update(ctx.sidebar, message) {
        sidebar::Event::None => Task::none(),
        sidebar::Event::UploadRequested => {
            begin_upload(ctx);
            open_file_dialog(ctx.app_state.last_open_directory.clone())
        }
        sidebar::Event::Select(action) => select(ctx, action),
        sidebar::Event::DownloadRequested => start_download(ctx),
    }
}

pub fn handle_preview_message(ctx: &mut UpdateContext<'_>, message: preview::Message) -> Task<Message> {
    match preview::update(ctx.preview, message) {
        preview::Event::None => {}
        preview::Event::ToggleCompare => dispatch(ctx, Action::ToggleCompareMode),
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    if ctx.preview.is_loading() || ctx.pending_upload.is_some() {
        ctx.preview.tick();
    }
    Task::none()
}

// =============================================================================
// Upload
// =============================================================================

/// Clears the previous image before a new one is chosen.
fn begin_upload(ctx: &mut UpdateContext<'_>) {
    dispatch(ctx, Action::UploadStarted);
    ctx.preview.clear();
    ctx.sidebar.reset();
}

fn open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::UploadFileChosen,
    )
}

pub fn handle_file_chosen(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => start_upload(ctx, path),
        None => {
            tracing::debug!("open dialog dismissed");
            Task::none()
        }
    }
}

/// Uploads `path`; any earlier upload still in flight becomes stale.
pub fn start_upload(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    begin_upload(ctx);

    let Some(client) = cloud_client(ctx) else {
        return Task::none();
    };

    ctx.app_state.set_last_open_directory_from_file(&path);
    if let Some(key) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(key));
    }

    let generation = ctx.transform.generation();
    *ctx.pending_upload = Some(generation);
    let fallback_size = ctx.config.display.preview_size();

    tracing::info!(path = %path.display(), "uploading");
    Task::perform(
        async move { client.upload(&path, fallback_size).await },
        move |result| Message::UploadCompleted { generation, result },
    )
}

pub fn handle_upload_completed(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<ImageDescriptor, Error>,
) -> Task<Message> {
    if *ctx.pending_upload != Some(generation) {
        tracing::debug!(?generation, "discarding stale upload result");
        return Task::none();
    }
    *ctx.pending_upload = None;

    match result {
        Ok(descriptor) => {
            tracing::info!(public_id = %descriptor.public_id, "upload complete");
            dispatch(ctx, Action::UploadSucceeded(descriptor));
            ctx.notifications.clear_errors();
            ctx.notifications
                .push(Notification::success("notification-upload-success"));
            fetch_original(ctx)
        }
        Err(err) => {
            ctx.notifications.push(Notification::from_error(&err));
            Task::none()
        }
    }
}

// =============================================================================
// Previews
// =============================================================================

fn fetch_original(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (Some(descriptor), Ok(client)) = (ctx.transform.descriptor(), ctx.client) else {
        return Task::none();
    };

    let size = ctx.config.display.preview_size();
    let url = client
        .delivery()
        .original_url(&descriptor.public_id, size, size);
    let task = fetch_preview(
        client.clone(),
        url,
        ctx.transform.generation(),
        PreviewSlot::Original,
    );

    ctx.preview.set_original(Slot::Loading);
    task
}

fn fetch_transformed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (Some(descriptor), Ok(client)) = (ctx.transform.descriptor(), ctx.client) else {
        return Task::none();
    };

    let size = ctx.config.display.preview_size();
    let url = client.delivery().url(
        &descriptor.public_id,
        size,
        size,
        ctx.transform.selection(),
    );
    let task = fetch_preview(
        client.clone(),
        url,
        ctx.transform.generation(),
        PreviewSlot::Transformed,
    );

    ctx.preview.set_transformed(Slot::Loading);
    task
}

fn fetch_preview(
    client: CloudClient,
    url: String,
    generation: Generation,
    slot: PreviewSlot,
) -> Task<Message> {
    Task::perform(async move { client.fetch(&url).await }, move |result| {
        Message::PreviewFetched {
            generation,
            slot,
            result,
        }
    })
}

/// Applies a selection and requests the matching transformed preview.
fn select(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    let before = ctx.transform.generation();
    dispatch(ctx, action);

    // Nothing uploaded: the reducer ignored the selection.
    if ctx.transform.generation() == before {
        return Task::none();
    }
    fetch_transformed(ctx)
}

pub fn handle_preview_fetched(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    slot: PreviewSlot,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    let current = ctx.transform.generation();

    match slot {
        // The original stays valid across selection changes.
        PreviewSlot::Original if !generation.same_descriptor(&current) => {
            tracing::debug!(?generation, "discarding stale original preview");
        }
        PreviewSlot::Transformed if generation != current => {
            tracing::debug!(?generation, "discarding stale transformed preview");
        }
        PreviewSlot::Original => match result {
            Ok(bytes) => ctx.preview.set_original(Slot::from_bytes(bytes)),
            Err(err) => {
                ctx.preview.set_original(Slot::Failed);
                ctx.notifications.push(Notification::from_error(&err));
            }
        },
        PreviewSlot::Transformed => match result {
            Ok(bytes) => {
                ctx.preview.set_transformed(Slot::from_bytes(bytes));
                dispatch(ctx, Action::TransformedLoaded(generation));
            }
            Err(err) => {
                ctx.preview.set_transformed(Slot::Failed);
                ctx.notifications.push(Notification::from_error(&err));
            }
        },
    }

    Task::none()
}

// =============================================================================
// Download
// =============================================================================

fn start_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.transform.descriptor().is_none() || *ctx.downloading {
        return Task::none();
    }
    let Some(client) = cloud_client(ctx) else {
        return Task::none();
    };
    let Some(descriptor) = ctx.transform.descriptor() else {
        return Task::none();
    };

    let url = build_url(client.delivery(), descriptor, ctx.transform.selection());
    let generation = ctx.transform.generation();
    *ctx.downloading = true;

    tracing::info!(%url, "downloading");
    Task::perform(async move { client.fetch(&url).await }, move |result| {
        Message::DownloadFetched { generation, result }
    })
}

pub fn handle_download_fetched(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    if generation != ctx.transform.generation() {
        tracing::debug!(?generation, "discarding stale download");
        *ctx.downloading = false;
        ctx.notifications
            .push(Notification::info("notification-download-stale"));
        return Task::none();
    }

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(err) => {
            *ctx.downloading = false;
            ctx.notifications.push(Notification::from_error(&err));
            return Task::none();
        }
    };

    let directory = ctx.config.download.directory();
    let stem = ctx.config.download.file_name().to_string();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || download::save(&directory, &stem, &bytes))
                .await
                .map_err(|err| Error::Io(err.to_string()))
                .and_then(|saved| saved)
        },
        Message::DownloadSaved,
    )
}

pub fn handle_download_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    *ctx.downloading = false;

    match result {
        Ok(path) => ctx.notifications.push(
            Notification::success("notification-download-success")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => ctx.notifications.push(Notification::from_error(&err)),
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use tempfile::TempDir;

    const PNG_HEADER: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    /// Owns everything an `UpdateContext` borrows.
    struct Harness {
        config: Config,
        client: Result<CloudClient, Error>,
        transform: transform::State,
        sidebar: sidebar::State,
        preview: preview::State,
        pending_upload: Option<Generation>,
        downloading: bool,
        app_state: AppState,
        notifications: notifications::Manager,
        downloads: TempDir,
    }

    impl Harness {
        fn uploaded() -> Self {
            let downloads = tempfile::tempdir().expect("temp dir");
            let mut config = Config::default();
            config.download.directory = Some(downloads.path().to_path_buf());
            let client = CloudClient::from_config(&config.cloud, &config.download);
            let transform = transform::reduce(
                transform::State::default(),
                Action::UploadSucceeded(ImageDescriptor::new("abc123", 800, 600)),
            );

            Self {
                config,
                client,
                transform,
                sidebar: sidebar::State::default(),
                preview: preview::State::new(0.5),
                pending_upload: None,
                downloading: false,
                app_state: AppState::default(),
                notifications: notifications::Manager::new(),
                downloads,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                config: &self.config,
                client: &self.client,
                transform: &mut self.transform,
                sidebar: &mut self.sidebar,
                preview: &mut self.preview,
                pending_upload: &mut self.pending_upload,
                downloading: &mut self.downloading,
                app_state: &mut self.app_state,
                notifications: &mut self.notifications,
            }
        }

        fn toasts(&self) -> Vec<(Severity, String)> {
            self.notifications
                .visible()
                .map(|n| (n.severity(), n.message_key().to_string()))
                .collect()
        }
    }

    #[test]
    fn stale_download_is_discarded_with_info_toast() {
        let mut h = Harness::uploaded();
        let issued = h.transform.generation();
        h.downloading = true;

        let _ = select(&mut h.ctx(), Action::SelectRestore);
        let _ = handle_download_fetched(&mut h.ctx(), issued, Ok(PNG_HEADER.to_vec()));

        assert!(!h.downloading);
        assert_eq!(
            h.toasts(),
            vec![(Severity::Info, "notification-download-stale".to_string())]
        );
        let saved = std::fs::read_dir(h.downloads.path()).expect("listable").count();
        assert_eq!(saved, 0);
    }

    #[test]
    fn failed_download_resets_flag_and_reports_error() {
        let mut h = Harness::uploaded();
        let issued = h.transform.generation();
        h.downloading = true;

        let _ = handle_download_fetched(
            &mut h.ctx(),
            issued,
            Err(Error::Network("offline".to_string())),
        );

        assert!(!h.downloading);
        assert_eq!(
            h.toasts(),
            vec![(Severity::Error, "error-network".to_string())]
        );
    }

    #[test]
    fn original_preview_survives_selection_change() {
        let mut h = Harness::uploaded();
        let issued = h.transform.generation();

        let _ = select(&mut h.ctx(), Action::SelectRestore);
        let _ = handle_preview_fetched(
            &mut h.ctx(),
            issued,
            PreviewSlot::Original,
            Ok(PNG_HEADER.to_vec()),
        );

        assert!(h.preview.original().handle().is_some());
    }

    #[test]
    fn original_preview_of_replaced_image_is_dropped() {
        let mut h = Harness::uploaded();
        let issued = h.transform.generation();

        begin_upload(&mut h.ctx());
        let _ = handle_preview_fetched(
            &mut h.ctx(),
            issued,
            PreviewSlot::Original,
            Ok(PNG_HEADER.to_vec()),
        );

        assert!(matches!(h.preview.original(), Slot::Empty));
    }

    #[test]
    fn stale_transformed_preview_is_dropped() {
        let mut h = Harness::uploaded();

        let _ = select(&mut h.ctx(), Action::SelectRestore);
        let stale = h.transform.generation();
        let _ = select(&mut h.ctx(), Action::SelectRemoveBackground);
        let current = h.transform.generation();

        let _ = handle_preview_fetched(
            &mut h.ctx(),
            stale,
            PreviewSlot::Transformed,
            Ok(PNG_HEADER.to_vec()),
        );
        assert!(h.preview.transformed().is_loading());
        assert!(!h.transform.view().transformed_image_loaded);

        let _ = handle_preview_fetched(
            &mut h.ctx(),
            current,
            PreviewSlot::Transformed,
            Ok(PNG_HEADER.to_vec()),
        );
        assert!(h.preview.transformed().handle().is_some());
        assert!(h.transform.view().transformed_image_loaded);
    }

    #[test]
    fn failed_transformed_preview_marks_slot() {
        let mut h = Harness::uploaded();
        let _ = select(&mut h.ctx(), Action::SelectRestore);
        let current = h.transform.generation();

        let _ = handle_preview_fetched(
            &mut h.ctx(),
            current,
            PreviewSlot::Transformed,
            Err(Error::Status {
                status: 423,
                body: "pending".to_string(),
            }),
        );

        assert!(matches!(h.preview.transformed(), Slot::Failed));
        assert!(!h.transform.view().transformed_image_loaded);
        assert_eq!(
            h.toasts(),
            vec![(Severity::Error, "error-http-status".to_string())]
        );
    }

    #[test]
    fn superseded_upload_result_is_ignored() {
        let mut h = Harness::uploaded();

        begin_upload(&mut h.ctx());
        let first = h.transform.generation();
        begin_upload(&mut h.ctx());
        let second = h.transform.generation();
        h.pending_upload = Some(second);

        let _ = handle_upload_completed(
            &mut h.ctx(),
            first,
            Ok(ImageDescriptor::new("late", 10, 10)),
        );
        assert!(h.transform.descriptor().is_none());
        assert_eq!(h.pending_upload, Some(second));
        assert!(h.toasts().is_empty());

        let _ = handle_upload_completed(
            &mut h.ctx(),
            second,
            Ok(ImageDescriptor::new("fresh", 10, 10)),
        );
        assert_eq!(
            h.transform.descriptor().map(|d| d.public_id.as_str()),
            Some("fresh")
        );
        assert!(h.pending_upload.is_none());
        assert!(h.preview.original().is_loading());
        assert_eq!(
            h.toasts(),
            vec![(Severity::Success, "notification-upload-success".to_string())]
        );
    }
}
