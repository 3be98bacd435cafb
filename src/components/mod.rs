//! UI components built with Leptos.
//!
//! - [`Header`] - Page title bar
//! - [`sidebar`] - Demo and uploaded file list with the upload button
//! - [`viewer`] - Preview area: dispatcher plus audio, image and text viewers
//! - [`icons`] - Centralized icon definitions (change theme here)

mod header;
pub mod icons;
pub mod sidebar;
pub mod viewer;

pub use header::Header;
pub use sidebar::Sidebar;
pub use viewer::FileViewer;
