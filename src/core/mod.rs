//! Core logic of the upload and paste page.
//!
//! This module provides:
//! - `page` - Page state and its transitions
//! - [`UploadPasteController`] - Drives the asynchronous operations
//! - [`Transport`], [`FileHandle`] - Seams to the browser (mocked in tests)

mod controller;
pub mod error;
mod page;
pub mod transport;

pub use controller::UploadPasteController;
pub use transport::{FileHandle, HttpReply, Transport};
