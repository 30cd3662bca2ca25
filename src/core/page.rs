//! Page state and its transitions.
//!
//! [`PageState`] is plain data: every user or I/O event maps to one method
//! here, which keeps the rules testable without a browser. The controller
//! wraps it in a signal and drives the asynchronous parts.

use crate::core::error::{PasteError, UploadError};
use crate::models::{
    FileEntry, FileResult, ListingKind, Mode, PasteRequest, PasteResult, ProgressView,
    UploadProgress,
};

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Active section; exactly one at a time
    pub mode: Mode,
    /// Bumped on every new selection; stale completions carry an older value
    pub generation: u64,
    /// File-sharing result area
    pub files: FileResult,
    /// Upload progress container
    pub progress: ProgressView,
    /// Pastebin result area
    pub paste: PasteResult,
    /// A drag is hovering over the drop area
    pub dragging: bool,
    /// Open `dragenter`s on the drop area and its children
    drag_depth: u32,
}

impl PageState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // Mode
    // ------------------------------------------------------------------------

    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Whether the section for `mode` is shown (and its nav control active).
    pub fn is_active(&self, mode: Mode) -> bool {
        self.mode == mode
    }

    // ------------------------------------------------------------------------
    // File selection and upload
    // ------------------------------------------------------------------------

    /// Replace the listing with a fresh selection and return its generation.
    pub fn select_files(&mut self, entries: Vec<FileEntry>) -> u64 {
        self.generation += 1;
        self.end_drag();
        self.files = FileResult::Listing {
            kind: ListingKind::Selected,
            entries,
        };
        self.generation
    }

    /// Attach a decoded thumbnail to row `index`.
    ///
    /// Returns `false` when the selection was replaced, the listing is gone,
    /// or the row is not an image.
    pub fn attach_preview(&mut self, generation: u64, index: usize, data_url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        let FileResult::Listing { entries, .. } = &mut self.files else {
            return false;
        };
        match entries.get_mut(index) {
            Some(entry) if entry.is_image => {
                entry.preview = Some(data_url);
                true
            }
            _ => false,
        }
    }

    /// Show the progress container at 0%.
    pub fn begin_upload(&mut self, generation: u64) {
        if generation == self.generation {
            self.progress = ProgressView {
                visible: true,
                percent: 0,
            };
        }
    }

    /// Apply a progress notification. Notifications without a total are ignored.
    pub fn record_progress(&mut self, generation: u64, progress: UploadProgress) {
        if generation != self.generation || !self.progress.visible {
            return;
        }
        if let Some(percent) = progress.percent() {
            self.progress.percent = percent;
        }
    }

    /// Replace the listing with the uploaded rows and hide progress.
    pub fn show_uploaded(&mut self, generation: u64, entries: Vec<FileEntry>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.files = FileResult::Listing {
            kind: ListingKind::Uploaded,
            entries,
        };
        self.progress.visible = false;
        true
    }

    /// Render the generic failure message and hide progress.
    pub fn fail_upload(&mut self, generation: u64, error: &UploadError) {
        if generation != self.generation {
            return;
        }
        self.files = FileResult::Error(error.user_message().to_string());
        self.progress.visible = false;
    }

    // ------------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------------

    /// A drag entered the drop area or one of its children.
    pub fn drag_enter(&mut self) {
        self.drag_depth += 1;
        self.dragging = true;
    }

    /// A drag left the drop area or one of its children.
    ///
    /// Moving between children fires `dragenter` on the new target before
    /// `dragleave` on the old one, so the mark only clears on a real exit.
    pub fn drag_leave(&mut self) {
        self.drag_depth = self.drag_depth.saturating_sub(1);
        self.dragging = self.drag_depth > 0;
    }

    pub fn end_drag(&mut self) {
        self.drag_depth = 0;
        self.dragging = false;
    }

    // ------------------------------------------------------------------------
    // Paste
    // ------------------------------------------------------------------------

    /// Validate paste content, showing the error inline when it is blank.
    ///
    /// The request carries the text as typed, not trimmed.
    pub fn begin_paste(&mut self, content: &str) -> Result<PasteRequest, PasteError> {
        if content.trim().is_empty() {
            self.paste = PasteResult::Error(PasteError::Empty.user_message().to_string());
            return Err(PasteError::Empty);
        }
        Ok(PasteRequest {
            content: content.to_string(),
        })
    }

    pub fn finish_paste(&mut self, outcome: Result<String, PasteError>) {
        self.paste = match outcome {
            Ok(url) => PasteResult::Link(url),
            Err(e) => PasteResult::Error(e.user_message().to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ReplyError, TransportError};

    fn entries(names: &[(&str, &str)]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|(name, mime)| FileEntry::selected(*name, mime, 10))
            .collect()
    }

    #[test]
    fn test_exactly_one_mode_active() {
        let mut state = PageState::default();
        assert!(state.is_active(Mode::FileSharing));

        for mode in Mode::ALL {
            state.switch_mode(mode);
            let active: Vec<_> = Mode::ALL.into_iter().filter(|m| state.is_active(*m)).collect();
            assert_eq!(active, vec![mode]);
        }
    }

    #[test]
    fn test_selection_replaces_listing() {
        let mut state = PageState::default();
        let first = state.select_files(entries(&[("a.txt", "text/plain"), ("b.png", "image/png")]));
        assert_eq!(state.files.entries().len(), 2);

        let second = state.select_files(entries(&[("c.txt", "text/plain")]));
        assert!(second > first);
        let names: Vec<_> = state.files.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c.txt"]);
    }

    #[test]
    fn test_previews_attach_in_any_order() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[
            ("a.png", "image/png"),
            ("b.txt", "text/plain"),
            ("c.gif", "image/gif"),
        ]));

        // Last decode finishes first
        assert!(state.attach_preview(generation, 2, "data:c".into()));
        assert!(state.attach_preview(generation, 0, "data:a".into()));

        let previews: Vec<_> = state
            .files
            .entries()
            .iter()
            .map(|e| e.preview.as_deref())
            .collect();
        assert_eq!(previews, vec![Some("data:a"), None, Some("data:c")]);
    }

    #[test]
    fn test_preview_rejected_for_non_image_and_bad_index() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[("b.txt", "text/plain")]));
        assert!(!state.attach_preview(generation, 0, "data:x".into()));
        assert!(!state.attach_preview(generation, 5, "data:x".into()));
    }

    #[test]
    fn test_stale_preview_discarded() {
        let mut state = PageState::default();
        let old = state.select_files(entries(&[("a.png", "image/png")]));
        state.select_files(entries(&[("b.png", "image/png")]));

        assert!(!state.attach_preview(old, 0, "data:a".into()));
        assert_eq!(state.files.entries()[0].preview, None);
    }

    #[test]
    fn test_progress_display() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[("a.txt", "text/plain")]));
        state.begin_upload(generation);
        assert_eq!(
            state.progress,
            ProgressView {
                visible: true,
                percent: 0
            }
        );

        state.record_progress(generation, UploadProgress::new(50, Some(200)));
        assert_eq!(state.progress.label(), "25%");

        // No computable total leaves the display unchanged
        state.record_progress(generation, UploadProgress::new(150, None));
        assert_eq!(state.progress.label(), "25%");
    }

    #[test]
    fn test_server_error_hides_progress() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[("a.txt", "text/plain")]));
        state.begin_upload(generation);

        state.fail_upload(generation, &UploadError::from(ReplyError::Status(500)));
        assert!(!state.progress.visible);
        assert_eq!(
            state.files,
            FileResult::Error("Error: File upload failed".to_string())
        );
    }

    #[test]
    fn test_transport_error_hides_progress() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[("a.txt", "text/plain")]));
        state.begin_upload(generation);

        state.fail_upload(
            generation,
            &UploadError::from(TransportError::Network("offline".into())),
        );
        assert!(!state.progress.visible);
        assert_eq!(
            state.files,
            FileResult::Error("Error: An error occurred during the upload".to_string())
        );
    }

    #[test]
    fn test_stale_upload_outcome_ignored() {
        let mut state = PageState::default();
        let old = state.select_files(entries(&[("a.txt", "text/plain")]));
        state.begin_upload(old);
        let current = state.select_files(entries(&[("b.txt", "text/plain")]));
        state.begin_upload(current);

        state.record_progress(old, UploadProgress::new(90, Some(100)));
        state.fail_upload(old, &UploadError::from(ReplyError::Status(500)));
        assert!(!state.show_uploaded(old, vec![]));

        assert_eq!(state.progress.percent, 0);
        assert!(state.progress.visible);
        assert_eq!(state.files.entries()[0].name, "b.txt");
    }

    #[test]
    fn test_show_uploaded() {
        let mut state = PageState::default();
        let generation = state.select_files(entries(&[("a.txt", "text/plain")]));
        state.begin_upload(generation);

        let uploaded = vec![FileEntry::uploaded("a.txt", "text/plain", 10, "https://x/a")];
        assert!(state.show_uploaded(generation, uploaded.clone()));
        assert!(!state.progress.visible);
        assert_eq!(
            state.files,
            FileResult::Listing {
                kind: ListingKind::Uploaded,
                entries: uploaded
            }
        );
    }

    #[test]
    fn test_blank_paste_rejected() {
        let mut state = PageState::default();
        for blank in ["", "   ", "\n\t "] {
            assert_eq!(state.begin_paste(blank), Err(PasteError::Empty));
            assert_eq!(
                state.paste,
                PasteResult::Error("Error: Paste content cannot be empty".to_string())
            );
        }
    }

    #[test]
    fn test_paste_keeps_untrimmed_content() {
        let mut state = PageState::default();
        let request = state.begin_paste("  fn main() {}\n").unwrap();
        assert_eq!(request.content, "  fn main() {}\n");
        assert_eq!(state.paste, PasteResult::Idle);
    }

    #[test]
    fn test_finish_paste() {
        let mut state = PageState::default();
        state.finish_paste(Ok("https://x/y".to_string()));
        assert_eq!(state.paste, PasteResult::Link("https://x/y".to_string()));

        state.finish_paste(Err(PasteError::from(ReplyError::Status(400))));
        assert_eq!(
            state.paste,
            PasteResult::Error("Error: Could not save paste".to_string())
        );
    }

    #[test]
    fn test_selection_clears_dragging() {
        let mut state = PageState::default();
        state.drag_enter();
        state.select_files(vec![]);
        assert!(!state.dragging);

        // A later drag starts from a clean count
        state.drag_enter();
        state.drag_leave();
        assert!(!state.dragging);
    }

    #[test]
    fn test_drag_over_children_keeps_mark() {
        let mut state = PageState::default();
        state.drag_enter(); // drop area
        state.drag_enter(); // icon
        state.drag_leave(); // drop area
        assert!(state.dragging);

        state.drag_enter(); // text
        state.drag_leave(); // icon
        assert!(state.dragging);

        state.drag_leave(); // text, out of the area
        assert!(!state.dragging);

        state.drag_leave();
        assert!(!state.dragging);
    }
}
