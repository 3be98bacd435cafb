//! Platform-independent core of the file preview widget.
//!
//! - [`Category`] - extension-based classification
//! - [`FileDescriptor`], [`FileLibrary`] - selectable files and the selection host
//! - [`ViewerState`] - which viewer a selection dispatches to
//! - [`PlaybackController`] - audio playback state machine
//! - [`ImageViewport`] - image zoom and load state
//! - [`text`] - line counting for the text viewer

pub mod category;
pub mod config;
pub mod error;
pub mod library;
pub mod playback;
pub mod session;
pub mod text;
pub mod viewer;
pub mod zoom;

pub use category::{Category, extension};
pub use error::{ManifestError, MediaKind, PreviewError};
pub use library::{FileDescriptor, FileLibrary, parse_manifest};
pub use playback::{
    MediaCommand, MediaSignal, PlayTicket, PlaybackController, PlaybackState, Timeline,
    format_time, track_ratio,
};
pub use session::SessionId;
pub use viewer::ViewerState;
pub use zoom::{ImageSignal, ImageStatus, ImageViewport, ZoomLevel};
