// SPDX-License-Identifier: MPL-2.0
//! Delivery URLs for hosted transformations.
//!
//! The hosted service applies a transformation when it is encoded in the
//! image URL. Two encodings are supported:
//!
//! - [`UrlStyle::Query`]: `<base>/<public_id>?width=W&height=H&restore=true&...`
//! - [`UrlStyle::Path`]: `<base>/e_gen_restore/e_improve:indoor:50/c_limit,w_W,h_H/<public_id>`
//!
//! Both are derived from the current selection only, never from how it was
//! reached.

use crate::error::{Error, Result};
use crate::transform::{ImageDescriptor, Transformation};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Enhancement applied together with restoration.
pub const RESTORE_IMPROVE: &str = "indoor:50";

/// Default delivery host; the cloud name is appended as the first path segment.
pub const DEFAULT_DELIVERY_HOST: &str = "https://res.cloudinary.com";

/// How transformation parameters are encoded in the URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UrlStyle {
    #[default]
    Query,
    Path,
}

/// Base location of delivered images plus the URL encoding to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    base: Url,
    style: UrlStyle,
}

impl Delivery {
    /// Creates a delivery endpoint from an absolute base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base` is not an absolute hierarchical URL.
    pub fn new(base: &str, style: UrlStyle) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| Error::Config(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("{base}: not a base URL")));
        }
        Ok(Self { base, style })
    }

    /// Default image delivery endpoint for a cloud account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the cloud name is empty.
    pub fn for_cloud(cloud_name: &str, style: UrlStyle) -> Result<Self> {
        let cloud_name = cloud_name.trim();
        if cloud_name.is_empty() {
            return Err(Error::Config("cloud name is empty".to_string()));
        }
        Self::new(
            &format!("{DEFAULT_DELIVERY_HOST}/{cloud_name}/image/upload"),
            style,
        )
    }

    #[must_use]
    pub fn style(&self) -> UrlStyle {
        self.style
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of the untouched image at the given size.
    #[must_use]
    pub fn original_url(&self, public_id: &str, width: u32, height: u32) -> String {
        self.url(public_id, width, height, &Transformation::None)
    }

    /// URL of `public_id` at the given size with `selection` applied.
    #[must_use]
    pub fn url(
        &self,
        public_id: &str,
        width: u32,
        height: u32,
        selection: &Transformation,
    ) -> String {
        let mut url = self.base.clone();

        // Checked in `new`: the base always accepts path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            if self.style == UrlStyle::Path {
                segments.extend(path_transformations(selection));
                segments.push(&format!("c_limit,w_{width},h_{height}"));
            }
            segments.extend(public_id.split('/').filter(|s| !s.is_empty()));
        }

        if self.style == UrlStyle::Query {
            let query = query_parameters(width, height, selection)
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        url.into()
    }
}

/// Transformed-image URL for a descriptor at its own size.
#[must_use]
pub fn build_url(
    delivery: &Delivery,
    descriptor: &ImageDescriptor,
    selection: &Transformation,
) -> String {
    delivery.url(
        &descriptor.public_id,
        descriptor.width,
        descriptor.height,
        selection,
    )
}

fn query_parameters(width: u32, height: u32, selection: &Transformation) -> Vec<(&'static str, String)> {
    let mut params = vec![("width", width.to_string()), ("height", height.to_string())];

    if selection.restore() {
        params.push(("restore", "true".to_string()));
        params.push(("improve", RESTORE_IMPROVE.to_string()));
    } else if let Some(color) = selection.background() {
        params.push(("removeBackground", "true".to_string()));
        params.push(("background", format!("rgb:{}", color.as_str())));
    } else if selection.remove_background() {
        params.push(("removeBackground", "true".to_string()));
    }

    params
}

fn path_transformations(selection: &Transformation) -> Vec<String> {
    if selection.restore() {
        vec![
            "e_gen_restore".to_string(),
            format!("e_improve:{RESTORE_IMPROVE}"),
        ]
    } else if let Some(color) = selection.background() {
        vec![
            "e_background_removal".to_string(),
            format!("b_rgb:{}", color.as_str()),
        ]
    } else if selection.remove_background() {
        vec!["e_background_removal".to_string()]
    } else {
        Vec::new()
    }
}
