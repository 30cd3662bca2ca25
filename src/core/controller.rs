//! Upload/paste controller.
//!
//! Owns the page state for the lifetime of the page and turns DOM events
//! into state transitions and outbound requests. Operations that finish
//! asynchronously return a future; the caller spawns it and never waits.

use std::future::Future;

use futures::future::join_all;
use leptos::prelude::*;

use crate::core::error::{PasteError, UploadError};
use crate::core::page::PageState;
use crate::core::transport::{FileHandle, Transport};
use crate::models::{
    FileEntry, FileResult, Mode, PasteResponse, PasteResult, ProgressView, UploadResponse,
    is_image_mime,
};
use crate::utils::dom;
use crate::utils::format::data_url;

/// Page controller, generic over the transport so it runs against a mock
/// on the host.
///
/// All fields are arena handles, so the controller is `Copy` and can be
/// moved into event handlers freely. File handles and the transport are
/// not `Send` in the browser and live in local storage.
pub struct UploadPasteController<T: Transport> {
    state: RwSignal<PageState>,
    selection: StoredValue<Vec<T::File>, LocalStorage>,
    transport: StoredValue<T, LocalStorage>,
}

impl<T: Transport> Clone for UploadPasteController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Transport> Copy for UploadPasteController<T> {}

impl<T: Transport> UploadPasteController<T> {
    pub fn new(transport: T, initial_mode: Mode) -> Self {
        Self {
            state: RwSignal::new(PageState::new(initial_mode)),
            selection: StoredValue::new_local(Vec::new()),
            transport: StoredValue::new_local(transport),
        }
    }

    /// Snapshot of the current state without tracking.
    #[cfg(any(test, feature = "mock"))]
    pub fn snapshot(&self) -> PageState {
        self.state.get_untracked()
    }

    // Per-section slices; each notifies only when its own value changes

    /// Whether the section for `mode` is shown.
    pub fn is_active(&self, mode: Mode) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_active(mode)))
    }

    pub fn files(&self) -> Memo<FileResult> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.files.clone()))
    }

    pub fn progress(&self) -> Memo<ProgressView> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.progress))
    }

    pub fn dragging(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.dragging))
    }

    pub fn paste(&self) -> Memo<PasteResult> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.paste.clone()))
    }

    pub fn switch_mode(&self, mode: Mode) {
        self.state.update(|s| s.switch_mode(mode));
    }

    pub fn drag_enter(&self) {
        self.state.update(|s| s.drag_enter());
    }

    pub fn drag_leave(&self) {
        self.state.update(|s| s.drag_leave());
    }

    pub fn end_drag(&self) {
        self.state.update(|s| s.end_drag());
    }

    /// Replace the selection and upload it.
    ///
    /// The listing is rendered before this returns. The returned future
    /// decodes image thumbnails and runs the upload concurrently.
    pub fn select_files(&self, files: Vec<T::File>) -> impl Future<Output = ()> + use<T> {
        let decodes = self.intake(files);
        let upload = self.upload();
        async move {
            futures::join!(decodes, upload);
        }
    }

    /// Replace the selection and render one row per file.
    ///
    /// Returns the future decoding thumbnails for the image files.
    pub fn intake(&self, files: Vec<T::File>) -> impl Future<Output = ()> + use<T> {
        let entries = files
            .iter()
            .map(|f| FileEntry::selected(f.name(), &f.mime_type(), f.size()))
            .collect();
        let generation = self.state.try_update(|s| s.select_files(entries)).unwrap_or(0);
        self.selection.set_value(files.clone());
        self.decode_previews(generation, files)
    }

    /// Upload the current selection.
    ///
    /// Shows the progress container immediately; the returned future sends
    /// the request and renders the outcome. There is no guard against
    /// overlapping uploads: an outcome for a replaced selection is dropped.
    pub fn upload(&self) -> impl Future<Output = ()> + use<T> {
        let this = *self;
        let state = self.state;
        let generation = state.with_untracked(|s| s.generation);
        let files = self.selection.get_value();
        state.update(|s| s.begin_upload(generation));
        dom::console_log(&format!("uploading {} file(s)", files.len()));

        async move {
            let transport = this.transport.get_value();
            let outcome = transport
                .upload(&files, move |progress| {
                    state.update(|s| s.record_progress(generation, progress));
                })
                .await
                .map_err(UploadError::from)
                .and_then(|reply| {
                    reply
                        .json_if_created::<UploadResponse>()
                        .map_err(UploadError::from)
                });

            match outcome {
                Ok(response) => {
                    let entries = files
                        .iter()
                        .zip(&response.urls)
                        .map(|(f, url)| FileEntry::uploaded(f.name(), &f.mime_type(), f.size(), url))
                        .collect();
                    let shown = state
                        .try_update(|s| s.show_uploaded(generation, entries))
                        .unwrap_or(false);
                    if shown {
                        let uploaded = files.into_iter().take(response.urls.len()).collect();
                        this.decode_previews(generation, uploaded).await;
                    }
                }
                Err(e) => {
                    dom::console_warn(&e.to_string());
                    state.update(|s| s.fail_upload(generation, &e));
                }
            }
        }
    }

    /// Submit paste content.
    ///
    /// Blank content is rejected before this returns and the future is a
    /// no-op; otherwise the future posts the paste and renders the outcome.
    pub fn submit_paste(&self, content: &str) -> impl Future<Output = ()> + use<T> {
        let state = self.state;
        let transport = self.transport;
        let request = state.try_update(|s| s.begin_paste(content));

        async move {
            let Some(Ok(request)) = request else {
                return;
            };
            let transport = transport.get_value();
            let outcome = transport
                .paste(&request)
                .await
                .map_err(PasteError::from)
                .and_then(|reply| {
                    reply
                        .json_if_created::<PasteResponse>()
                        .map(|r| r.url)
                        .map_err(PasteError::from)
                });

            if let Err(e) = &outcome {
                dom::console_warn(&e.to_string());
            }
            state.update(|s| s.finish_paste(outcome));
        }
    }

    /// Decode every image file into a `data:` URL, concurrently.
    ///
    /// Each completion writes only its own row, in whatever order they finish.
    fn decode_previews(&self, generation: u64, files: Vec<T::File>) -> impl Future<Output = ()> + use<T> {
        let state = self.state;
        let jobs: Vec<_> = files
            .into_iter()
            .enumerate()
            .filter(|(_, file)| is_image_mime(&file.mime_type()))
            .map(move |(index, file)| async move {
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let url = data_url(&file.mime_type(), &bytes);
                        state.update(|s| {
                            s.attach_preview(generation, index, url);
                        });
                    }
                    Err(e) => dom::console_warn(&e.to_string()),
                }
            })
            .collect();

        async move {
            join_all(jobs).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::mock::{MemoryFile, MockTransport};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::{ListingKind, UploadProgress};

    fn controller(transport: &MockTransport) -> UploadPasteController<MockTransport> {
        UploadPasteController::new(transport.clone(), Mode::FileSharing)
    }

    fn png(name: &str) -> MemoryFile {
        MemoryFile::new(name, "image/png", &[0x89, b'P', b'N', b'G'])
    }

    fn text(name: &str) -> MemoryFile {
        MemoryFile::new(name, "text/plain", b"hello")
    }

    #[test]
    fn test_mode_switching() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        for mode in [Mode::Pastebin, Mode::Faq, Mode::FileSharing] {
            ctrl.switch_mode(mode);
            let state = ctrl.snapshot();
            assert_eq!(
                Mode::ALL.iter().filter(|m| state.is_active(**m)).count(),
                1
            );
            assert!(state.is_active(mode));
        }
    }

    #[test]
    fn test_listing_ignores_unrelated_updates() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        let files = ctrl.files();
        let runs = Arc::new(AtomicUsize::new(0));
        let rows = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                files.with(|f| f.entries().len())
            })
        };

        let _decodes = ctrl.intake(vec![text("a.txt"), text("b.txt")]);
        assert_eq!(rows.get_untracked(), 2);
        let settled = runs.load(Ordering::SeqCst);

        for _ in 0..5 {
            ctrl.drag_enter();
            ctrl.drag_leave();
        }
        ctrl.switch_mode(Mode::Pastebin);

        assert_eq!(rows.get_untracked(), 2);
        assert_eq!(runs.load(Ordering::SeqCst), settled);
        assert!(!ctrl.dragging().get_untracked());
        assert!(ctrl.is_active(Mode::Pastebin).get_untracked());
    }

    #[test]
    fn test_intake_renders_every_file_before_await() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        let _decodes = ctrl.intake(vec![text("a.txt"), png("b.png"), text("c.md")]);

        let state = ctrl.snapshot();
        let names: Vec<_> = state.files.entries().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["a.txt", "b.png", "c.md"]);
        assert!(matches!(
            state.files,
            FileResult::Listing {
                kind: ListingKind::Selected,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_intake_decodes_image_previews() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        ctrl.intake(vec![png("a.png"), text("b.txt")]).await;

        let state = ctrl.snapshot();
        let entries = state.files.entries();
        assert_eq!(entries[0].preview.as_deref(), Some("data:image/png;base64,iVBORw=="));
        assert_eq!(entries[1].preview, None);
    }

    #[tokio::test]
    async fn test_unreadable_image_has_no_preview() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        ctrl.intake(vec![png("a.png").unreadable()]).await;
        assert_eq!(ctrl.snapshot().files.entries()[0].preview, None);
    }

    #[tokio::test]
    async fn test_upload_success_pairs_urls_with_files() {
        let transport = MockTransport::new();
        transport
            .reply_upload(201, r#"{"urls":["https://x/1","https://x/2","https://x/3"]}"#)
            .emit_progress(&[
                UploadProgress::new(50, Some(200)),
                UploadProgress::new(200, Some(200)),
            ]);
        let ctrl = controller(&transport);

        ctrl.select_files(vec![text("a.txt"), png("b.png"), text("c.txt")])
            .await;

        assert_eq!(transport.uploads(), vec![vec!["a.txt", "b.png", "c.txt"]]);

        let state = ctrl.snapshot();
        assert!(!state.progress.visible);
        let FileResult::Listing { kind, entries } = &state.files else {
            panic!("expected a listing, got {:?}", state.files);
        };
        assert_eq!(*kind, ListingKind::Uploaded);
        let pairs: Vec<_> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.link.as_deref().unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a.txt", "https://x/1"),
                ("b.png", "https://x/2"),
                ("c.txt", "https://x/3"),
            ]
        );
        // Uploaded images get their preview again
        assert!(entries[1].preview.is_some());
        assert!(entries[0].preview.is_none());
    }

    #[tokio::test]
    async fn test_upload_shows_progress_while_in_flight() {
        let transport = MockTransport::new();
        transport.reply_upload(201, r#"{"urls":["https://x/1"]}"#);
        let ctrl = controller(&transport);

        let _decodes = ctrl.intake(vec![text("a.txt")]);
        let pending = ctrl.upload();

        let progress = ctrl.snapshot().progress;
        assert!(progress.visible);
        assert_eq!(progress.label(), "0%");

        pending.await;
        assert!(!ctrl.snapshot().progress.visible);
    }

    #[tokio::test]
    async fn test_upload_progress_percentage() {
        let transport = MockTransport::new();
        // No reply queued: the upload ends in a transport error, after progress
        transport.emit_progress(&[UploadProgress::new(50, Some(200))]);
        let ctrl = controller(&transport);

        let _decodes = ctrl.intake(vec![text("a.txt")]);
        ctrl.upload().await;

        // The failure hid the bar but the last percentage is kept
        let progress = ctrl.snapshot().progress;
        assert!(!progress.visible);
        assert_eq!(progress.label(), "25%");
    }

    #[tokio::test]
    async fn test_upload_server_error() {
        let transport = MockTransport::new();
        transport.reply_upload(500, r#"{"urls":["https://x/1"]}"#);
        let ctrl = controller(&transport);

        ctrl.select_files(vec![text("a.txt")]).await;

        let state = ctrl.snapshot();
        assert!(!state.progress.visible);
        assert_eq!(
            state.files,
            FileResult::Error("Error: File upload failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_upload_created_with_bad_body() {
        let transport = MockTransport::new();
        transport.reply_upload(201, "<html></html>");
        let ctrl = controller(&transport);

        ctrl.select_files(vec![text("a.txt")]).await;
        assert_eq!(
            ctrl.snapshot().files,
            FileResult::Error("Error: File upload failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_upload_network_error() {
        let transport = MockTransport::new();
        transport.fail_upload();
        let ctrl = controller(&transport);

        ctrl.select_files(vec![text("a.txt")]).await;

        let state = ctrl.snapshot();
        assert!(!state.progress.visible);
        assert_eq!(
            state.files,
            FileResult::Error("Error: An error occurred during the upload".to_string())
        );
    }

    #[tokio::test]
    async fn test_upload_with_fewer_urls_renders_prefix() {
        let transport = MockTransport::new();
        transport.reply_upload(201, r#"{"urls":["https://x/1"]}"#);
        let ctrl = controller(&transport);

        ctrl.select_files(vec![text("a.txt"), text("b.txt")]).await;

        let entries = ctrl.snapshot().files.entries().to_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.txt");
    }

    #[tokio::test]
    async fn test_superseded_upload_is_dropped() {
        let transport = MockTransport::new();
        transport
            .reply_upload(201, r#"{"urls":["https://x/old"]}"#)
            .reply_upload(500, "");
        let ctrl = controller(&transport);

        let _first_decodes = ctrl.intake(vec![text("old.txt")]);
        let first = ctrl.upload();
        // A new selection arrives before the first upload completes
        let _second_decodes = ctrl.intake(vec![text("new.txt")]);
        first.await;

        let state = ctrl.snapshot();
        assert_eq!(state.files.entries()[0].name, "new.txt");
        assert_eq!(state.files.entries()[0].link, None);
    }

    #[tokio::test]
    async fn test_blank_paste_never_hits_network() {
        let transport = MockTransport::new();
        let ctrl = controller(&transport);

        ctrl.submit_paste("   ").await;

        assert!(transport.pastes().is_empty());
        assert_eq!(
            ctrl.snapshot().paste,
            PasteResult::Error("Error: Paste content cannot be empty".to_string())
        );
    }

    #[tokio::test]
    async fn test_paste_success_renders_link() {
        let transport = MockTransport::new();
        transport.reply_paste(201, r#"{"url":"https://x/y"}"#);
        let ctrl = controller(&transport);

        ctrl.submit_paste("hello").await;

        assert_eq!(transport.pastes()[0].content, "hello");
        assert_eq!(
            ctrl.snapshot().paste,
            PasteResult::Link("https://x/y".to_string())
        );
    }

    #[tokio::test]
    async fn test_paste_failures() {
        let transport = MockTransport::new();
        transport.reply_paste(400, r#"{"error":"No content provided"}"#);
        transport.fail_paste();
        let ctrl = controller(&transport);

        ctrl.submit_paste("hello").await;
        assert_eq!(
            ctrl.snapshot().paste,
            PasteResult::Error("Error: Could not save paste".to_string())
        );

        ctrl.submit_paste("hello").await;
        assert_eq!(
            ctrl.snapshot().paste,
            PasteResult::Error("Error: An error occurred while submitting the paste".to_string())
        );
        assert_eq!(transport.pastes().len(), 2);
    }
}
