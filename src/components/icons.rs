//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use filepeek_core::Category;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFileText as FileText, LuFolderOpen as FolderOpen,
        LuImage as FileImage, LuLoader as Loading, LuMusic as FileAudio, LuPause as Pause,
        LuPlay as Play, LuPlus as Plus, LuRotateCcw as Reset, LuTriangleAlert as Warning,
        LuZoomIn as ZoomIn, LuZoomOut as ZoomOut,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsExclamationTriangle as Warning,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText,
        BsFolder2Open as FolderOpen, BsHourglassSplit as Loading,
        BsMusicNoteBeamed as FileAudio, BsPauseFill as Pause, BsPlayFill as Play,
        BsPlusLg as Plus, BsZoomIn as ZoomIn, BsZoomOut as ZoomOut,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(LOADING, Loading);
themed_icon!(WARNING, Warning);
themed_icon!(ZOOM_IN, ZoomIn);
themed_icon!(ZOOM_OUT, ZoomOut);
themed_icon!(RESET, Reset);
themed_icon!(PLUS, Plus);

/// Sidebar icon for a descriptor's category hint.
pub fn for_category(category: Category) -> Icon {
    match category {
        Category::Audio => FILE_AUDIO,
        Category::Image => FILE_IMAGE,
        Category::Text => FILE_TEXT,
        Category::Unknown => FILE,
    }
}
