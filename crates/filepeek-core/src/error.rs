//! Error types for previews and demo data.
//!
//! - [`PreviewError`] - per-source failures shown inline by a viewer
//! - [`ManifestError`] - demo manifest could not be parsed

use std::fmt;

use thiserror::Error;

/// Which kind of media element failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("audio file"),
            Self::Image => f.write_str("image"),
        }
    }
}

/// Terminal failure of one previewed source.
///
/// Both variants replace the viewer UI for that source. Nothing retries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The source could not be fetched or decoded.
    #[error("Failed to load {0}")]
    LoadFailure(MediaKind),
    /// The platform rejected a play request (autoplay policy, decode error).
    #[error("Playback failed")]
    PlaybackStartFailure(String),
}

impl PreviewError {
    /// Platform-provided detail, if any, for logging.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::LoadFailure(_) => None,
            Self::PlaybackStartFailure(reason) => Some(reason),
        }
    }
}

/// Demo manifest errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid demo manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate demo file name: {0}")]
    DuplicateName(String),
}
