//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The demo file list is loaded at compile time using `include_str!`.

use filepeek_core::FileLibrary;

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the page header.
pub const APP_TITLE: &str = "File Viewer";

/// Hint shown under the title.
pub const APP_SUBTITLE: &str = "Click on a file to preview it. Audio files get a music player!";

/// Sidebar section label.
pub const SIDEBAR_TITLE: &str = "Files";

// =============================================================================
// Demo Files
// =============================================================================

/// Demo file manifest (`[[file]]` tables with name, url, type, content).
pub const DEMO_MANIFEST: &str = include_str!("../assets/demo/files.toml");

/// Build the file library from the embedded demo manifest.
///
/// A broken manifest is logged and leaves the sidebar with uploads only.
pub fn demo_library() -> FileLibrary {
    FileLibrary::from_manifest(DEMO_MANIFEST).unwrap_or_else(|err| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!("Demo files unavailable: {}", err).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = err;
        FileLibrary::default()
    })
}

// =============================================================================
// Upload Configuration
// =============================================================================

/// `accept` filter for the upload picker.
pub const UPLOAD_ACCEPT: &str = "audio/*,image/*,.txt,.md,.js,.jsx,.ts,.tsx,.json,.css,.html";

// =============================================================================
// Icon Theme
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
