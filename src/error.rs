use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Message shown to the user for every failure except a missing photo.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error analyzing image. Please try again.";
pub const NO_IMAGE_MESSAGE: &str = "Please upload an image first";

// Main Application Error Type

#[derive(Error, Debug)]
pub enum VibeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Decode Error: {0}")]
    Decode(#[from] DecodeError),
    #[error("No photo was supplied for analysis")]
    NoImage,
    #[error("Failed to read photo {1}: {0}")]
    ReadError(std::io::Error, PathBuf),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
}

impl VibeError {
    /// The user never sees error kinds, only one of two fixed messages.
    pub fn user_message(&self) -> &'static str {
        match self {
            VibeError::NoImage => NO_IMAGE_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood tag: {0}")]
pub struct UnknownMoodError(pub String);

// Image Decoding Error Type
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("The photo is empty")]
    Empty,
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to decode photo: {0}")]
    Corrupt(#[from] image::ImageError),
    #[error("Decoding did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("Decode worker failed: {0}")]
    Worker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_error_kind() {
        let errors = [
            VibeError::InvalidInput("empty".to_string()),
            VibeError::Decode(DecodeError::Empty),
            VibeError::Decode(DecodeError::TimedOut(Duration::from_secs(1))),
            VibeError::ReadError(
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                PathBuf::from("photo.png"),
            ),
        ];
        for error in &errors {
            assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn missing_photo_asks_for_upload() {
        assert_eq!(VibeError::NoImage.user_message(), NO_IMAGE_MESSAGE);
    }

    #[test]
    fn unknown_mood_error_names_the_tag() {
        assert_eq!(
            UnknownMoodError("disco".to_string()).to_string(),
            "Unknown mood tag: disco"
        );
    }

    #[test]
    fn decode_error_converts_into_vibe_error() {
        let error: VibeError = DecodeError::UnsupportedFormat("text".to_string()).into();
        assert!(matches!(
            error,
            VibeError::Decode(DecodeError::UnsupportedFormat(_))
        ));
        assert_eq!(
            error.to_string(),
            "Decode Error: Unsupported image format: text"
        );
    }
}
