//! Browser `File` support.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FileList};

use super::dom::js_error_message;
use crate::core::FileHandle;
use crate::core::error::DecodeError;

impl FileHandle for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        Blob::type_(self)
    }

    fn size(&self) -> u64 {
        Blob::size(self) as u64
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let buffer = JsFuture::from(Blob::array_buffer(self))
            .await
            .map_err(|e| DecodeError::ReadFailed {
                name: File::name(self),
                reason: js_error_message(&e),
            })?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

/// Collect the files of a drop or picker selection, in order.
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
