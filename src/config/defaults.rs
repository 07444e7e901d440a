// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Cloud Defaults
// ==========================================================================

/// Public demo account of the hosted service.
pub const DEFAULT_CLOUD_NAME: &str = "demo";

/// Unsigned upload preset used when none is configured.
pub const DEFAULT_UPLOAD_PRESET: &str = "ml_default";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Edge length (pixels) requested for preview images.
pub const DEFAULT_PREVIEW_SIZE: u32 = 400;

/// Smallest accepted preview size.
pub const MIN_PREVIEW_SIZE: u32 = 64;

/// Largest accepted preview size.
pub const MAX_PREVIEW_SIZE: u32 = 2048;

/// Initial divider position of the compare slider (0.0 = left edge).
pub const DEFAULT_SLIDER_POSITION: f32 = 0.5;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Stem of downloaded files; the extension is detected from the payload.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "image";

/// Largest payload accepted for uploads and fetches (20 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 20 * 1024 * 1024;

/// Lower bound for `max_bytes` so a typo cannot block every fetch.
pub const MIN_MAX_BYTES: u64 = 64 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_bounds_contain_default() {
        assert!(MIN_PREVIEW_SIZE <= DEFAULT_PREVIEW_SIZE);
        assert!(DEFAULT_PREVIEW_SIZE <= MAX_PREVIEW_SIZE);
    }

    #[test]
    fn slider_default_is_centered() {
        assert!((DEFAULT_SLIDER_POSITION - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn max_bytes_default_is_above_floor() {
        assert!(DEFAULT_MAX_BYTES > MIN_MAX_BYTES);
    }
}
