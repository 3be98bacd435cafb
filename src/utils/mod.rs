//! Utility modules for DOM access and file uploads.
//!
//! Provides:
//! - [`dom`] - window access, blob URLs, event helpers
//! - [`read_upload`] - turn a picked file into a descriptor

pub mod dom;
mod upload;

pub use upload::read_upload;
