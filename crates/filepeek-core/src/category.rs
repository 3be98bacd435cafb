//! Extension-based file classification.
//!
//! Classification never looks at file contents. Two entry points exist
//! because the sidebar upload path and the viewer disagree on what to do with
//! unrecognized names: uploads fall back to text, the viewer falls back to
//! [`Category::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, TEXT_EXTENSIONS};

/// Coarse file kind derived from a file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Audio,
    Image,
    Text,
    #[default]
    Unknown,
}

impl Category {
    /// Classify a file name for the viewer.
    ///
    /// Audio and image tables are checked first, then the text table.
    /// Anything else, including names without an extension, is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let ext = extension(name);
        if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Audio
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Self::Text
        } else {
            Self::Unknown
        }
    }

    /// Classify a freshly uploaded file.
    ///
    /// Anything that is not audio or image is read as text.
    pub fn for_upload(name: &str) -> Self {
        match Self::from_name(name) {
            Self::Audio => Self::Audio,
            Self::Image => Self::Image,
            _ => Self::Text,
        }
    }

    /// Whether this category is rendered from in-memory text content.
    pub fn needs_content(self) -> bool {
        self == Self::Text
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased substring after the last `.`.
///
/// Returns an empty string for names without a `.` and for names ending in
/// one.
pub fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Extension Tests
    // =========================================================================

    #[test]
    fn test_extension() {
        assert_eq!(extension("song.MP3"), "mp3");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("README"), "");
        assert_eq!(extension("trailing."), "");
        assert_eq!(extension(".bashrc"), "bashrc");
    }

    // =========================================================================
    // Classification Tests
    // =========================================================================

    #[test]
    fn test_every_table_entry_classifies_in_any_case() {
        for ext in AUDIO_EXTENSIONS {
            assert_eq!(Category::from_name(&format!("a.{ext}")), Category::Audio);
            let upper = format!("a.{}", ext.to_uppercase());
            assert_eq!(Category::from_name(&upper), Category::Audio);
        }
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(Category::from_name(&format!("a.{ext}")), Category::Image);
            let upper = format!("a.{}", ext.to_uppercase());
            assert_eq!(Category::from_name(&upper), Category::Image);
        }
        for ext in TEXT_EXTENSIONS {
            assert_eq!(Category::from_name(&format!("a.{ext}")), Category::Text);
            let upper = format!("a.{}", ext.to_uppercase());
            assert_eq!(Category::from_name(&upper), Category::Text);
        }
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert_eq!(Category::from_name("archive.tar.gz"), Category::Unknown);
        assert_eq!(Category::for_upload("archive.tar.gz"), Category::Text);
        assert_eq!(Category::from_name("photo.png.txt"), Category::Text);
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(Category::from_name("README"), Category::Unknown);
        assert_eq!(Category::for_upload("README"), Category::Text);
    }

    #[test]
    fn test_upload_keeps_media_categories() {
        assert_eq!(Category::for_upload("loop.WAV"), Category::Audio);
        assert_eq!(Category::for_upload("cover.webp"), Category::Image);
        assert_eq!(Category::for_upload("notes.md"), Category::Text);
        assert_eq!(Category::for_upload("data.xyz"), Category::Text);
    }

    #[test]
    fn test_category_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: Category,
        }
        let parsed: Wrapper = toml::from_str("kind = \"image\"").unwrap();
        assert_eq!(parsed.kind, Category::Image);
        assert_eq!(Category::Audio.to_string(), "audio");
    }
}
