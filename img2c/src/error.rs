//! This module defines the custom error type `Error` used throughout the library,
//! as well as various error message constants.
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
    #[error(transparent)]
    Decode(image::ImageError),
    #[error("Encoding error: {0}")]
    Encode(String),
}

/// Coarse classification of an [`Error`], for front ends that map failures
/// onto exit codes or status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    SourceUnavailable,
    Decode,
    Encode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::SourceUnavailable(_) => ErrorKind::SourceUnavailable,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Encode(_) => ErrorKind::Encode,
        }
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::other(error.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::SourceUnavailable(format!("{error}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::SourceUnavailable(format!("{ERROR_FETCHING_URL}: {error}"))
    }
}

/// Error message for an empty palette.
pub const ERROR_NO_CHARS: &str = "no characters provided";
/// Error message for a zero cell width or height.
pub const ERROR_DIMENSIONS: &str = "sub_width and sub_height dimensions required";
/// Error message for issues related to opening a resource.
pub const ERROR_OPENING_RESOURCE: &str = "Error opening resource";
/// Error message for issues related to fetching a remote image.
pub const ERROR_FETCHING_URL: &str = "Error fetching url";
/// Error message for issues related to encoding an output image.
pub const ERROR_ENCODING_IMAGE: &str = "Error encoding image";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_source_failures() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn configuration_message_names_the_problem() {
        let err = Error::Configuration(ERROR_NO_CHARS.to_string());
        assert_eq!(err.to_string(), "Configuration error: no characters provided");
    }
}
