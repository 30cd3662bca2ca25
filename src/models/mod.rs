//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Mode`] - Which page section is shown, with hash routing
//! - [`FileEntry`], [`FileResult`] - File rows and the file-sharing result area
//! - [`UploadProgress`], [`ProgressView`] - Upload progress
//! - [`PasteRequest`], [`UploadResponse`], [`PasteResponse`] - Endpoint bodies
//! - [`PasteResult`] - Pastebin result area

mod api;
mod files;
mod mode;
mod paste;
mod progress;

pub use api::{PasteRequest, PasteResponse, UploadResponse};
pub use files::{FileEntry, FileResult, ListingKind, is_image_mime};
pub use mode::Mode;
pub use paste::PasteResult;
pub use progress::{ProgressView, UploadProgress};
