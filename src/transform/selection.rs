// SPDX-License-Identifier: MPL-2.0
//! The single-choice transformation selection and its colour parameter.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A background colour as six lowercase hex digits, without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a value coming from a colour input.
    ///
    /// A single leading `#` is stripped before validation, so both `#00ff00`
    /// and `00ff00` are accepted. Anything else must be exactly six hex digits.
    pub fn from_picker(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(value.to_string()));
        }

        Ok(Self(digits.to_ascii_lowercase()))
    }

    /// The stored digits (no `#`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_picker(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The transformation currently requested from the hosted service.
///
/// At most one operation is active at a time. The record view used by the
/// URL builder (`restore`, `remove_background`, `background`) is exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Transformation {
    #[default]
    None,
    /// Generative restoration plus an indoor enhancement pass.
    Restore,
    /// Background removal leaving a transparent background.
    RemoveBackground,
    /// Background removal followed by a solid background colour.
    BackgroundColor(HexColor),
}

impl Transformation {
    /// Whether any operation is selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Transformation::None)
    }

    #[must_use]
    pub fn restore(&self) -> bool {
        matches!(self, Transformation::Restore)
    }

    /// True for plain background removal and for recolouring.
    #[must_use]
    pub fn remove_background(&self) -> bool {
        matches!(
            self,
            Transformation::RemoveBackground | Transformation::BackgroundColor(_)
        )
    }

    /// The replacement background colour, if any.
    #[must_use]
    pub fn background(&self) -> Option<&HexColor> {
        match self {
            Transformation::BackgroundColor(color) => Some(color),
            _ => None,
        }
    }
}
