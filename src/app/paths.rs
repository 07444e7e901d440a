// SPDX-License-Identifier: MPL-2.0
//! Where CloudLens keeps its files.
//!
//! Two directories are used: the config directory (`settings.toml`) and the
//! data directory (`state.cbor`). Each is resolved in this order:
//!
//! 1. An explicit override passed to the `_with_override()` functions (tests)
//! 2. The `--config-dir` / `--data-dir` CLI arguments, see [`init_cli_overrides`]
//! 3. The `CLOUD_LENS_CONFIG_DIR` / `CLOUD_LENS_DATA_DIR` environment variables
//! 4. The platform directory from the `dirs` crate, with the app name appended
//!
//! The download directory is configured separately (see `config`) and
//! defaults to [`default_download_dir`].

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "CloudLens";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "CLOUD_LENS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CLOUD_LENS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are ignored so the values
/// seen by the rest of the application never change.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("data dir override already initialized");
    }
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory for application state (not user preferences).
///
/// Returns `None` if no platform data directory exists.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory holding `settings.toml`.
///
/// Returns `None` if no platform config directory exists.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

/// Where downloads go when `[download] directory` is not set.
///
/// Falls back to the home directory, then the current directory.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
