//! HTTP transport for the upload and paste endpoints.
//!
//! Uploads go through `XMLHttpRequest`, the only browser API that reports
//! upload progress; its completion is bridged into a `Promise` and awaited.
//! Pastes use `gloo-net`'s fetch wrapper.

use gloo_net::http::Request;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use super::dom::js_error_message;
use crate::config::{PASTE_ENDPOINT, UPLOAD_ENDPOINT, UPLOAD_FIELD};
use crate::core::error::TransportError;
use crate::core::{HttpReply, Transport};
use crate::models::{PasteRequest, UploadProgress};

/// Browser transport posting to the configured endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    upload_url: &'static str,
    paste_url: &'static str,
}

impl HttpTransport {
    pub fn new(upload_url: &'static str, paste_url: &'static str) -> Self {
        Self {
            upload_url,
            paste_url,
        }
    }
}

impl HttpTransport {
    /// JSON `POST` to the paste endpoint.
    fn paste_request(&self, request: &PasteRequest) -> Result<Request, TransportError> {
        Request::post(self.paste_url)
            .json(request)
            .map_err(|e| TransportError::RequestCreationFailed(e.to_string()))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT, PASTE_ENDPOINT)
    }
}

fn creation_failed(e: JsValue) -> TransportError {
    TransportError::RequestCreationFailed(js_error_message(&e))
}

/// One `files[]` part per file, in selection order.
fn build_form(files: &[File]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(creation_failed)?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(creation_failed)?;
    }
    Ok(form)
}

/// Promise settling when the request finishes.
///
/// Resolves on `load` whatever the HTTP status; rejects on `error`, `abort`
/// and `timeout`, i.e. when no response is available.
fn completion(xhr: &XmlHttpRequest) -> Promise {
    Promise::new(&mut |resolve, reject| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
        xhr.set_onabort(Some(&reject));
        xhr.set_ontimeout(Some(&reject));
    })
}

impl Transport for HttpTransport {
    type File = File;

    async fn upload<P>(&self, files: &[File], on_progress: P) -> Result<HttpReply, TransportError>
    where
        P: Fn(UploadProgress) + 'static,
    {
        let form = build_form(files)?;
        let xhr = XmlHttpRequest::new().map_err(creation_failed)?;
        xhr.open_with_async("POST", self.upload_url, true)
            .map_err(creation_failed)?;

        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            let total = event.length_computable().then(|| event.total() as u64);
            on_progress(UploadProgress::new(event.loaded() as u64, total));
        });
        let upload = xhr.upload().map_err(creation_failed)?;
        upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let done = completion(&xhr);
        xhr.send_with_opt_form_data(Some(&form))
            .map_err(|e| TransportError::Network(js_error_message(&e)))?;
        let settled = JsFuture::from(done).await;

        // The listener must outlive the request, and no longer
        upload.set_onprogress(None);
        drop(progress);

        settled.map_err(|_| TransportError::Network(format!("POST {} failed", self.upload_url)))?;

        let status = xhr
            .status()
            .map_err(|e| TransportError::Network(js_error_message(&e)))?;
        let body = xhr
            .response_text()
            .map_err(|e| TransportError::Network(js_error_message(&e)))?
            .unwrap_or_default();

        Ok(HttpReply { status, body })
    }

    async fn paste(&self, request: &PasteRequest) -> Result<HttpReply, TransportError> {
        let response = self
            .paste_request(request)?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
