// SPDX-License-Identifier: MPL-2.0
//! `cloud_lens` uploads an image to a hosted image service, requests
//! restoration, background removal or a background color on the service side,
//! and compares the result with the original.
//!
//! The transform view is driven by a pure reducer ([`transform`]); network
//! access lives in [`cloud`] and the Iced application in [`app`].

pub mod app;
pub mod cloud;
pub mod config;
pub mod error;
pub mod i18n;
pub mod transform;
pub mod ui;
