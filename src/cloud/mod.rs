// SPDX-License-Identifier: MPL-2.0
//! Client side of the hosted image service.
//!
//! # Components
//!
//! - [`delivery`] - Delivery URL construction for original and transformed images
//! - [`CloudClient`] - Shared HTTP client: uploads and image fetches
//! - [`download`] - Saving a fetched image to disk
//!
//! No image is processed locally; every transformation is requested from the
//! service through the delivery URL.

mod client;
pub mod delivery;
pub mod download;
mod fetch;
mod upload;

pub use client::CloudClient;
pub use delivery::{build_url, Delivery, UrlStyle};
pub use upload::{parse_upload_response, sniff_image};
