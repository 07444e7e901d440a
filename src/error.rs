// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-wide error type.
///
/// Errors travel inside `Message`s across async task boundaries, so every
/// variant stores plain strings and the type stays `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Network Error: {0}")]
    Network(String),

    /// The hosted service answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The upload response could not be read as an image descriptor.
    #[error("Malformed upload response: {0}")]
    MalformedResponse(String),

    /// The selected file is not an image the hosted service accepts.
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Payload too large: {size} bytes (limit {limit})")]
    PayloadTooLarge { size: u64, limit: u64 },
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Status { .. } => "error-http-status",
            Error::MalformedResponse(_) => "error-malformed-response",
            Error::UnsupportedFile(_) => "error-unsupported-file",
            Error::InvalidColor(_) => "error-invalid-color",
            Error::PayloadTooLarge { .. } => "error-payload-too-large",
        }
    }

    /// Returns the Fluent arguments referenced by the [`i18n_key`](Self::i18n_key) message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Error::Io(detail)
            | Error::Config(detail)
            | Error::Network(detail)
            | Error::MalformedResponse(detail)
            | Error::UnsupportedFile(detail)
            | Error::InvalidColor(detail) => vec![("detail", detail.clone())],
            Error::Status { status, body } => {
                vec![("status", status.to_string()), ("detail", body.clone())]
            }
            Error::PayloadTooLarge { size, limit } => {
                vec![("size", size.to_string()), ("limit", limit.to_string())]
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = Error::Status {
            status: 401,
            body: "Unknown API key".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("Unknown API key"));
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let err: Error = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn status_args_carry_code_and_body() {
        let err = Error::Status {
            status: 404,
            body: "Resource not found".into(),
        };
        assert_eq!(
            err.i18n_args(),
            vec![
                ("status", "404".to_string()),
                ("detail", "Resource not found".to_string())
            ]
        );
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::Network(String::new()).i18n_key(),
            Error::Status {
                status: 500,
                body: String::new(),
            }
            .i18n_key(),
            Error::MalformedResponse(String::new()).i18n_key(),
            Error::UnsupportedFile(String::new()).i18n_key(),
            Error::InvalidColor(String::new()).i18n_key(),
            Error::PayloadTooLarge { size: 2, limit: 1 }.i18n_key(),
        ];
        let mut unique = keys.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), keys.len());
    }
}
