//! Browser adapters and formatting helpers.
//!
//! Provides:
//! - [`HttpTransport`] - Upload (XHR with progress) and paste (fetch) requests
//! - [`files_from_list`] - Files of a drop or picker selection
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`dom`], [`format`] - DOM access, console logging, size and data URL formatting

pub mod dom;
mod file;
pub mod format;
mod http;
mod markdown;

pub use file::files_from_list;
pub use http::HttpTransport;
pub use markdown::markdown_to_html;
