//! Preview configuration.
//!
//! Centralizes the extension tables and viewer limits shared by the
//! classifier and the viewer state machines.

// =============================================================================
// Extension Tables
// =============================================================================

/// Extensions rendered by the audio player.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "ogg", "flac", "aac", "m4a", "wma", "aiff", "opus", "webm",
];

/// Extensions rendered by the image viewer.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif",
];

/// Extensions rendered by the text viewer.
///
/// Only consulted when dispatching a selected file. Uploads treat anything
/// that is not audio or image as text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "js", "jsx", "ts", "tsx", "css", "html", "xml", "yaml", "yml", "py", "rb",
    "go", "rs", "java", "c", "cpp", "h", "hpp", "sh", "bash", "zsh", "fish",
];

// =============================================================================
// Image Viewer
// =============================================================================

/// Smallest zoom level, in percent.
pub const MIN_ZOOM_PERCENT: u16 = 25;

/// Largest zoom level, in percent.
pub const MAX_ZOOM_PERCENT: u16 = 300;

/// Zoom level shown for a freshly mounted viewer and after reset.
pub const DEFAULT_ZOOM_PERCENT: u16 = 100;

/// Increment applied by a single zoom in/out action.
pub const ZOOM_STEP_PERCENT: u16 = 25;

// =============================================================================
// Text Viewer
// =============================================================================

/// Placeholder rendered when a text file has no content.
pub const EMPTY_FILE_PLACEHOLDER: &str = "(empty file)";

/// Label shown for the extension of an unsupported file without one.
pub const UNKNOWN_EXTENSION_LABEL: &str = "unknown";
