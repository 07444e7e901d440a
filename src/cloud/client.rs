// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client for the hosted image service.

use super::delivery::{Delivery, UrlStyle};
use crate::config::{CloudConfig, DownloadConfig};
use crate::error::{Error, Result};
use reqwest::Url;

/// Default upload API host; `/v1_1/<cloud>/image/upload` is appended.
pub const DEFAULT_UPLOAD_HOST: &str = "https://api.cloudinary.com";

const USER_AGENT: &str = concat!("CloudLens/", env!("CARGO_PKG_VERSION"));

/// Connection settings plus a pooled `reqwest` client.
///
/// Cloning is cheap; clones share the connection pool and are moved into
/// async tasks.
#[derive(Debug, Clone)]
pub struct CloudClient {
    pub(super) http: reqwest::Client,
    pub(super) delivery: Delivery,
    pub(super) upload_endpoint: Url,
    pub(super) upload_preset: String,
    pub(super) max_bytes: u64,
}

impl CloudClient {
    /// Builds a client from explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload endpoint is not a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(
        delivery: Delivery,
        upload_endpoint: &str,
        upload_preset: impl Into<String>,
        max_bytes: u64,
    ) -> Result<Self> {
        let upload_endpoint = Url::parse(upload_endpoint)
            .map_err(|e| Error::Config(format!("{upload_endpoint}: {e}")))?;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::from)?;

        Ok(Self {
            http,
            delivery,
            upload_endpoint,
            upload_preset: upload_preset.into(),
            max_bytes,
        })
    }

    /// Builds a client from the `[cloud]` and `[download]` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when neither explicit URLs nor a cloud name
    /// are configured, or when a URL is invalid.
    pub fn from_config(cloud: &CloudConfig, download: &DownloadConfig) -> Result<Self> {
        let style = cloud.url_style.unwrap_or(UrlStyle::Query);

        let delivery = match cloud.delivery_url.as_deref() {
            Some(base) => Delivery::new(base, style)?,
            None => Delivery::for_cloud(&cloud.cloud_name, style)?,
        };

        let upload_endpoint = match cloud.upload_url.clone() {
            Some(url) => url,
            None => default_upload_endpoint(&cloud.cloud_name)?,
        };

        Self::new(
            delivery,
            &upload_endpoint,
            cloud.upload_preset.clone(),
            download.max_bytes(),
        )
    }

    #[must_use]
    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    #[must_use]
    pub fn upload_preset(&self) -> &str {
        &self.upload_preset
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

fn default_upload_endpoint(cloud_name: &str) -> Result<String> {
    let cloud_name = cloud_name.trim();
    if cloud_name.is_empty() {
        return Err(Error::Config("cloud name is empty".to_string()));
    }
    Ok(format!("{DEFAULT_UPLOAD_HOST}/v1_1/{cloud_name}/image/upload"))
}

/// Reads the most useful error text out of a failed response body.
///
/// The hosted API answers errors with `{"error": {"message": "..."}}`; other
/// bodies are passed through, truncated.
pub(super) fn error_message(body: &str) -> String {
    const MAX_LEN: usize = 200;

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .pointer("/error/message")
            .and_then(serde_json::Value::as_str)
        {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_LEN) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_build_a_client() {
        let client = CloudClient::from_config(&CloudConfig::default(), &DownloadConfig::default())
            .expect("default config is usable");
        assert_eq!(client.delivery().style(), UrlStyle::Query);
        assert!(client
            .upload_endpoint
            .as_str()
            .ends_with("/image/upload"));
    }

    #[test]
    fn explicit_urls_override_cloud_name() {
        let cloud = CloudConfig {
            cloud_name: String::new(),
            delivery_url: Some("https://cdn.example.com/img".to_string()),
            upload_url: Some("https://upload.example.com/api".to_string()),
            ..CloudConfig::default()
        };
        let client = CloudClient::from_config(&cloud, &DownloadConfig::default())
            .expect("explicit urls are enough");
        assert_eq!(client.delivery().base().as_str(), "https://cdn.example.com/img");
        assert_eq!(client.upload_endpoint.as_str(), "https://upload.example.com/api");
    }

    #[test]
    fn missing_cloud_name_is_a_config_error() {
        let cloud = CloudConfig {
            cloud_name: " ".to_string(),
            ..CloudConfig::default()
        };
        let err = CloudClient::from_config(&cloud, &DownloadConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn error_message_prefers_api_message() {
        let body = r#"{"error":{"message":"Upload preset not found"}}"#;
        assert_eq!(error_message(body), "Upload preset not found");
    }

    #[test]
    fn error_message_truncates_long_bodies() {
        let body = "x".repeat(500);
        let message = error_message(&body);
        assert!(message.chars().count() <= 201);
        assert!(message.ends_with('…'));
    }
}
