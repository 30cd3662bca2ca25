//! Rendered file rows and the file-sharing result area.

use crate::config::{IMAGE_MIME_PREFIX, messages};

/// Check if a MIME type gets an inline thumbnail.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with(IMAGE_MIME_PREFIX)
}

/// One rendered file row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Whether a thumbnail will be decoded for this file
    pub is_image: bool,
    /// Download URL once the file has been uploaded
    pub link: Option<String>,
    /// Inline `data:` URL once decoding completed
    pub preview: Option<String>,
}

impl FileEntry {
    /// Row for a file that was selected but not uploaded.
    pub fn selected(name: impl Into<String>, mime_type: &str, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_image: is_image_mime(mime_type),
            link: None,
            preview: None,
        }
    }

    /// Row for a file the server returned a URL for.
    pub fn uploaded(
        name: impl Into<String>,
        mime_type: &str,
        size: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            link: Some(url.into()),
            ..Self::selected(name, mime_type, size)
        }
    }
}

/// Heading of a file listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    /// Files picked or dropped, upload pending
    Selected,
    /// Files the server accepted
    Uploaded,
}

impl ListingKind {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Selected => messages::SELECTED_HEADING,
            Self::Uploaded => messages::UPLOADED_HEADING,
        }
    }
}

/// Content of the file-sharing result area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileResult {
    /// Nothing selected yet
    #[default]
    Empty,
    /// A list of file rows under a heading
    Listing {
        kind: ListingKind,
        entries: Vec<FileEntry>,
    },
    /// Generic failure message
    Error(String),
}

impl FileResult {
    /// Rows currently shown (empty for `Empty` and `Error`).
    pub fn entries(&self) -> &[FileEntry] {
        match self {
            Self::Listing { entries, .. } => entries,
            _ => &[],
        }
    }
}
