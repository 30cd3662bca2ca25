//! Upload progress notifications and the progress bar state.

/// Bytes sent so far versus the total, as reported by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    /// `None` when the transport cannot compute the total
    pub total: Option<u64>,
}

impl UploadProgress {
    pub fn new(loaded: u64, total: Option<u64>) -> Self {
        Self { loaded, total }
    }

    /// Rounded percentage, or `None` without a usable total.
    pub fn percent(&self) -> Option<u8> {
        let total = self.total.filter(|&t| t > 0)?;
        let percent = (self.loaded as f64 / total as f64 * 100.0).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }
}

/// Progress container state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressView {
    pub visible: bool,
    pub percent: u8,
}

impl ProgressView {
    /// Text shown next to the bar (e.g. "25%").
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}
