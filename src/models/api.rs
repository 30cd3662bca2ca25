//! Request and response bodies of the upload and paste endpoints.

use serde::{Deserialize, Serialize};

/// `201` body of `POST /api/upload`, one URL per submitted file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub urls: Vec<String>,
}

/// Body of `POST /api/paste`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasteRequest {
    pub content: String,
}

/// `201` body of `POST /api/paste`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PasteResponse {
    pub url: String,
}
