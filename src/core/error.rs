//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`TransportError`] - The request never produced a response
//! - [`ReplyError`] - A response arrived but was not the expected `201` body
//! - [`DecodeError`] - Reading a local file for its thumbnail failed
//! - [`UploadError`], [`PasteError`] - Terminal outcomes of the two operations

use thiserror::Error;

use crate::config::messages;

/// Network-level failures where no HTTP response is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to build the request object or body
    #[error("Failed to create request: {0}")]
    RequestCreationFailed(String),
    /// Request failed before a response arrived (offline, CORS, abort)
    #[error("Network error: {0}")]
    Network(String),
}

/// A response arrived but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// Any status other than `201 Created`
    #[error("HTTP error: {0}")]
    Status(u16),
    /// `201` with a body that does not match the expected JSON
    #[error("JSON parse error: {0}")]
    Malformed(String),
}

/// Failure to read a selected file for its preview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Failed to read file '{name}': {reason}")]
    ReadFailed { name: String, reason: String },
}

/// Outcome of a failed upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Upload rejected: {0}")]
    Server(#[from] ReplyError),
    #[error("Upload failed: {0}")]
    Transport(#[from] TransportError),
}

impl UploadError {
    /// Generic message rendered into the result area.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Server(_) => messages::UPLOAD_FAILED,
            Self::Transport(_) => messages::UPLOAD_NETWORK,
        }
    }
}

/// Outcome of a rejected or failed paste.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    /// Content is empty after trimming; no request was made
    #[error("Paste content is empty")]
    Empty,
    #[error("Paste rejected: {0}")]
    Server(#[from] ReplyError),
    #[error("Paste failed: {0}")]
    Transport(#[from] TransportError),
}

impl PasteError {
    /// Generic message rendered into the result area.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Empty => messages::PASTE_EMPTY,
            Self::Server(_) => messages::PASTE_FAILED,
            Self::Transport(_) => messages::PASTE_NETWORK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_messages() {
        let server = UploadError::from(ReplyError::Status(500));
        let malformed = UploadError::from(ReplyError::Malformed("eof".into()));
        let network = UploadError::from(TransportError::Network("offline".into()));

        assert_eq!(server.user_message(), "Error: File upload failed");
        assert_eq!(malformed.user_message(), "Error: File upload failed");
        assert_eq!(
            network.user_message(),
            "Error: An error occurred during the upload"
        );
    }

    #[test]
    fn test_paste_messages() {
        assert_eq!(
            PasteError::Empty.user_message(),
            "Error: Paste content cannot be empty"
        );
        assert_eq!(
            PasteError::from(ReplyError::Status(400)).user_message(),
            "Error: Could not save paste"
        );
        assert_eq!(
            PasteError::from(TransportError::NoWindow).user_message(),
            "Error: An error occurred while submitting the paste"
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = UploadError::from(ReplyError::Status(413));
        assert_eq!(err.to_string(), "Upload rejected: HTTP error: 413");
    }
}
