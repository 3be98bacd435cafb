//! Local file uploads.
//!
//! Turns a picked `File` into a [`FileDescriptor`]: a blob URL for the bytes
//! and, for text uploads, the decoded content read before the descriptor is
//! handed out.

use std::fmt;

use filepeek_core::FileDescriptor;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::dom;

/// Upload errors.
#[derive(Debug, Clone)]
pub enum UploadError {
    /// The browser refused to create a blob URL.
    ObjectUrlFailed,
    /// Reading the file as text failed.
    ReadFailed(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectUrlFailed => write!(f, "Failed to create object URL"),
            Self::ReadFailed(msg) => write!(f, "Failed to read file: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

/// Build a descriptor for an uploaded file.
///
/// The blob URL is revoked again if the text content cannot be read.
pub async fn read_upload(file: File) -> Result<FileDescriptor, UploadError> {
    let url = dom::create_object_url(&file).ok_or(UploadError::ObjectUrlFailed)?;
    let descriptor = FileDescriptor::uploaded(file.name(), url);
    if !descriptor.kind.needs_content() {
        return Ok(descriptor);
    }

    let text = JsFuture::from(file.text())
        .await
        .map_err(|err| UploadError::ReadFailed(dom::js_error_message(&err)))
        .and_then(|value| {
            value
                .as_string()
                .ok_or_else(|| UploadError::ReadFailed("content is not text".to_string()))
        });

    match text {
        Ok(text) => Ok(descriptor.with_content(text)),
        Err(err) => {
            dom::revoke_object_url(&descriptor.url);
            Err(err)
        }
    }
}
