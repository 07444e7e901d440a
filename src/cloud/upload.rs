// SPDX-License-Identifier: MPL-2.0
//! Unsigned uploads to the hosted image service.

use super::client::{error_message, CloudClient};
use crate::error::{Error, Result};
use crate::transform::ImageDescriptor;
use image_rs::ImageFormat;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;

/// The fields of an upload result the application cares about.
///
/// Everything else the service returns (secure URL, version, tags...) is ignored.
#[derive(Debug, Deserialize)]
struct UploadInfo {
    public_id: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Checks that `bytes` look like an image the service will accept.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFile`] when the format cannot be recognised.
pub fn sniff_image(bytes: &[u8]) -> Result<ImageFormat> {
    image_rs::guess_format(bytes).map_err(|e| Error::UnsupportedFile(e.to_string()))
}

/// Turns an upload response body into a descriptor.
///
/// Only `public_id` is required. Missing or zero dimensions fall back to
/// `fallback_size` so the descriptor can still be rendered and downloaded.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the body is not JSON or has no
/// `public_id`.
pub fn parse_upload_response(body: &[u8], fallback_size: u32) -> Result<ImageDescriptor> {
    let info: UploadInfo =
        serde_json::from_slice(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    let public_id = info
        .public_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::MalformedResponse("missing public_id".to_string()))?;

    let dimension = |value: Option<u32>| value.filter(|v| *v > 0).unwrap_or(fallback_size);

    Ok(ImageDescriptor::new(
        public_id,
        dimension(info.width),
        dimension(info.height),
    ))
}

fn check_size(size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(Error::PayloadTooLarge { size, limit });
    }
    Ok(())
}

impl CloudClient {
    /// Uploads a local image file and returns its descriptor.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not an image, exceeds the size
    /// limit, or if the service rejects the upload.
    pub async fn upload(&self, path: &Path, fallback_size: u32) -> Result<ImageDescriptor> {
        // Checked before reading so an oversized file never lands in memory.
        let declared = tokio::fs::metadata(path).await?.len();
        check_size(declared, self.max_bytes)?;

        let bytes = tokio::fs::read(path).await?;
        let size = bytes.len() as u64;
        check_size(size, self.max_bytes)?;

        let format = sniff_image(&bytes)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        tracing::info!(file = %path.display(), size, ?format, "uploading image");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(format.to_mime_type())?;
        let form = Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        let response = self
            .http
            .post(self.upload_endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&String::from_utf8_lossy(&body));
            tracing::warn!(status = status.as_u16(), %message, "upload rejected");
            return Err(Error::Status {
                status: status.as_u16(),
                body: message,
            });
        }

        let descriptor = parse_upload_response(&body, fallback_size)?;
        tracing::info!(public_id = %descriptor.public_id, "upload complete");
        Ok(descriptor)
    }
}
