// SPDX-License-Identifier: MPL-2.0
//! Identity of an uploaded image.

/// Identifier and pixel size of one image stored by the hosted service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    pub public_id: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(public_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            public_id: public_id.into(),
            width,
            height,
        }
    }
}
