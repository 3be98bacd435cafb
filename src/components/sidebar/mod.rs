//! File selection sidebar.
//!
//! Lists the demo files followed by this session's uploads and hosts the
//! upload button.

mod file_list;
mod sidebar;
mod upload;

pub use sidebar::Sidebar;
