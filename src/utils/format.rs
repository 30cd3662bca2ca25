//! Formatting utilities for file sizes and inline image data.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::FALLBACK_MIME;

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Build a `data:` URL embedding `bytes` (e.g. for `<img src>`).
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        FALLBACK_MIME
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
