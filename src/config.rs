//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// FAQ page content (Markdown).
pub const FAQ_TEXT: &str = include_str!("../assets/text/faq.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "dropbin";

/// Short tagline shown next to the name.
pub const APP_TAGLINE: &str = "Share files and text in one drop";

/// Id of the element the app is mounted into.
pub const APP_ROOT_ID: &str = "app";

// =============================================================================
// Network Configuration
// =============================================================================

/// Endpoint receiving multipart file uploads.
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Endpoint receiving JSON paste submissions.
pub const PASTE_ENDPOINT: &str = "/api/paste";

/// Multipart field name repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files[]";

/// The only status both endpoints answer with on success.
pub const HTTP_CREATED: u16 = 201;

// =============================================================================
// File Handling
// =============================================================================

/// MIME prefix of files that get an inline thumbnail.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// MIME type assumed when the browser reports none.
pub const FALLBACK_MIME: &str = "application/octet-stream";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Fixed messages rendered into the result areas.
pub mod messages {
    /// Heading above a selection that has not been uploaded yet.
    pub const SELECTED_HEADING: &str = "Selected Files:";
    /// Heading above the links returned by a successful upload.
    pub const UPLOADED_HEADING: &str = "Uploaded Files:";
    /// Prefix in front of the paste link.
    pub const PASTE_URL_LABEL: &str = "Paste URL:";

    pub const UPLOAD_FAILED: &str = "Error: File upload failed";
    pub const UPLOAD_NETWORK: &str = "Error: An error occurred during the upload";
    pub const PASTE_EMPTY: &str = "Error: Paste content cannot be empty";
    pub const PASTE_FAILED: &str = "Error: Could not save paste";
    pub const PASTE_NETWORK: &str = "Error: An error occurred while submitting the paste";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Placeholder shown in the empty paste editor.
pub const PASTE_PLACEHOLDER: &str = "Paste your text here...";
