// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Encode Error: {0}")]
    Encode(String),
    /// Rasterizing the canvas produced nothing usable.
    #[error("Capture Error: {0}")]
    Capture(String),
    #[error("HTTP Error: {0}")]
    Http(String),
    /// The server answered but rejected the request.
    #[error("API Error: {0}")]
    Api(String),
    #[error("Delivery Error: {0}")]
    Delivery(String),
    #[error("Session Error: {0}")]
    Session(String),
    /// User-entered value rejected before any request is made.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether the failure happened while producing or delivering an export.
    #[must_use]
    pub fn is_export_failure(&self) -> bool {
        matches!(
            self,
            Error::Capture(_) | Error::Encode(_) | Error::Delivery(_) | Error::Io(_)
        )
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
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
    fn image_decode_error_maps_to_decode_variant() {
        let err: Error = image_rs::load_from_memory(b"definitely not an image")
            .expect_err("garbage must not decode")
            .into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn export_failures_are_classified() {
        assert!(Error::Capture("empty".into()).is_export_failure());
        assert!(Error::Delivery("denied".into()).is_export_failure());
        assert!(!Error::Api("nope".into()).is_export_failure());
        assert!(!Error::Decode("bad".into()).is_export_failure());
    }
}
