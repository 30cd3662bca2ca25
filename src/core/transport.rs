//! Seams between the controller and the browser.
//!
//! [`FileHandle`] abstracts a user-selected file and [`Transport`] the two
//! outbound requests. The browser implementations live in `utils`; the
//! [`mock`] module provides in-memory ones for host-side tests.

use serde::de::DeserializeOwned;

use crate::config::HTTP_CREATED;
use crate::core::error::{DecodeError, ReplyError, TransportError};
use crate::models::{PasteRequest, UploadProgress};

/// A file picked or dropped by the user.
#[allow(async_fn_in_trait)]
pub trait FileHandle: Clone + 'static {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;

    /// Read the whole file content.
    async fn read_bytes(&self) -> Result<Vec<u8>, DecodeError>;
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the JSON body of a `201 Created` reply.
    ///
    /// Other statuses fail without looking at the body.
    pub fn json_if_created<T: DeserializeOwned>(&self) -> Result<T, ReplyError> {
        if self.status != HTTP_CREATED {
            return Err(ReplyError::Status(self.status));
        }
        serde_json::from_str(&self.body).map_err(|e| ReplyError::Malformed(e.to_string()))
    }
}

/// The upload and paste requests.
///
/// Each call is a single attempt; there are no retries and no timeouts.
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + 'static {
    type File: FileHandle;

    /// POST all files as one multipart body, reporting send progress.
    async fn upload<P>(&self, files: &[Self::File], on_progress: P) -> Result<HttpReply, TransportError>
    where
        P: Fn(UploadProgress) + 'static;

    /// POST a JSON paste body.
    async fn paste(&self, request: &PasteRequest) -> Result<HttpReply, TransportError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! In-memory transport and files with scripted replies.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    /// File backed by a byte vector.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct MemoryFile {
        pub name: String,
        pub mime_type: String,
        pub bytes: Vec<u8>,
        /// Make `read_bytes` fail
        pub unreadable: bool,
    }

    impl MemoryFile {
        pub fn new(name: &str, mime_type: &str, bytes: &[u8]) -> Self {
            Self {
                name: name.to_string(),
                mime_type: mime_type.to_string(),
                bytes: bytes.to_vec(),
                unreadable: false,
            }
        }

        pub fn unreadable(mut self) -> Self {
            self.unreadable = true;
            self
        }
    }

    impl FileHandle for MemoryFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime_type.clone()
        }

        fn size(&self) -> u64 {
            self.bytes.len() as u64
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, DecodeError> {
            if self.unreadable {
                return Err(DecodeError::ReadFailed {
                    name: self.name.clone(),
                    reason: "unreadable".to_string(),
                });
            }
            Ok(self.bytes.clone())
        }
    }

    #[derive(Default)]
    struct Script {
        upload_replies: VecDeque<Result<HttpReply, TransportError>>,
        paste_replies: VecDeque<Result<HttpReply, TransportError>>,
        progress: Vec<UploadProgress>,
        uploads: Vec<Vec<String>>,
        pastes: Vec<PasteRequest>,
    }

    /// Transport answering from queued replies and recording every call.
    ///
    /// Clones share the same script, so a test can keep one handle while the
    /// controller owns another.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        script: Rc<RefCell<Script>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the reply for the next upload.
        pub fn reply_upload(&self, status: u16, body: &str) -> &Self {
            self.script
                .borrow_mut()
                .upload_replies
                .push_back(Ok(HttpReply::new(status, body)));
            self
        }

        /// Queue a transport failure for the next upload.
        pub fn fail_upload(&self) -> &Self {
            self.script
                .borrow_mut()
                .upload_replies
                .push_back(Err(TransportError::Network("connection reset".into())));
            self
        }

        /// Queue the reply for the next paste.
        pub fn reply_paste(&self, status: u16, body: &str) -> &Self {
            self.script
                .borrow_mut()
                .paste_replies
                .push_back(Ok(HttpReply::new(status, body)));
            self
        }

        /// Queue a transport failure for the next paste.
        pub fn fail_paste(&self) -> &Self {
            self.script
                .borrow_mut()
                .paste_replies
                .push_back(Err(TransportError::Network("connection reset".into())));
            self
        }

        /// Progress events emitted during every upload, in order.
        pub fn emit_progress(&self, events: &[UploadProgress]) -> &Self {
            self.script.borrow_mut().progress = events.to_vec();
            self
        }

        /// File names of each upload call.
        pub fn uploads(&self) -> Vec<Vec<String>> {
            self.script.borrow().uploads.clone()
        }

        /// Bodies of each paste call.
        pub fn pastes(&self) -> Vec<PasteRequest> {
            self.script.borrow().pastes.clone()
        }
    }

    impl Transport for MockTransport {
        type File = MemoryFile;

        async fn upload<P>(
            &self,
            files: &[MemoryFile],
            on_progress: P,
        ) -> Result<HttpReply, TransportError>
        where
            P: Fn(UploadProgress) + 'static,
        {
            let (progress, reply) = {
                let mut script = self.script.borrow_mut();
                script
                    .uploads
                    .push(files.iter().map(|f| f.name.clone()).collect());
                (script.progress.clone(), script.upload_replies.pop_front())
            };

            for event in progress {
                on_progress(event);
            }

            reply.unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
        }

        async fn paste(&self, request: &PasteRequest) -> Result<HttpReply, TransportError> {
            let mut script = self.script.borrow_mut();
            script.pastes.push(request.clone());
            script
                .paste_replies
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
        }
    }
}
