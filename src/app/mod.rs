// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sidebar, the preview
//! area and the hosted image service.
//!
//! The `App` struct owns the transform reducer state and the per-component UI
//! state, and turns messages into uploads, preview fetches and downloads via
//! the handlers in `update`.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, PreviewSlot};

use crate::cloud::CloudClient;
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::transform::{self, Generation};
use crate::ui::notifications::{self, Notification};
use crate::ui::{preview, sidebar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Service client, or the reason it could not be built from the config.
    client: Result<CloudClient, Error>,
    transform: transform::State,
    sidebar: sidebar::State,
    preview: preview::State,
    theme: Theme,
    /// Generation of the upload in flight, if any.
    pending_upload: Option<Generation>,
    downloading: bool,
    /// Persisted application state (last open directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("transform", &self.transform)
            .field("uploading", &self.pending_upload.is_some())
            .field("downloading", &self.downloading)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and persisted state, builds the service client and
    /// uploads the file given on the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, state_warning].into_iter().flatten() {
            notifications.push(Notification::warning(key));
        }

        let client = CloudClient::from_config(&config.cloud, &config.download);
        if let Err(err) = &client {
            tracing::error!(error = %err, "hosted image service is not usable");
            notifications.push(Notification::from_error(err));
        }

        let mut app = App {
            i18n,
            sidebar: sidebar::State::default(),
            preview: preview::State::new(config.display.slider_position()),
            theme: config.general.theme_mode.theme(),
            client,
            transform: transform::State::default(),
            pending_upload: None,
            downloading: false,
            app_state,
            notifications,
            config,
        };

        let task = match flags.file_path {
            Some(path) => app.update(Message::FileDropped(PathBuf::from(path))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.transform.descriptor() {
            Some(descriptor) => format!("{} - {app_name}", descriptor.public_id),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_loading = self.pending_upload.is_some() || self.preview.is_loading();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                is_loading,
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            client: &self.client,
            transform: &mut self.transform,
            sidebar: &mut self.sidebar,
            preview: &mut self.preview,
            pending_upload: &mut self.pending_upload,
            downloading: &mut self.downloading,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Preview(message) => update::handle_preview_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::UploadFileChosen(path) => update::handle_file_chosen(&mut ctx, path),
            Message::UploadCompleted { generation, result } => {
                update::handle_upload_completed(&mut ctx, generation, result)
            }
            Message::PreviewFetched {
                generation,
                slot,
                result,
            } => update::handle_preview_fetched(&mut ctx, generation, slot, result),
            Message::DownloadFetched { generation, result } => {
                update::handle_download_fetched(&mut ctx, generation, result)
            }
            Message::DownloadSaved(result) => update::handle_download_saved(&mut ctx, result),
            Message::FileDropped(path) => update::start_upload(&mut ctx, path),
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            transform: &self.transform,
            sidebar: &self.sidebar,
            preview: &self.preview,
            notifications: &self.notifications,
            uploading: self.pending_upload.is_some(),
            downloading: self.downloading,
        })
    }
}
