//! Viewer dispatch.

use crate::category::{Category, extension};
use crate::config::UNKNOWN_EXTENSION_LABEL;
use crate::library::FileDescriptor;

/// Which viewer the preview area shows.
///
/// Derived from the selection alone: every descriptor maps to exactly one
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    NoFile,
    ShowingAudio,
    ShowingImage,
    ShowingText,
    Unsupported {
        name: String,
        /// Raw extension, or `unknown` when the name has none.
        extension: String,
    },
}

impl ViewerState {
    pub fn for_file(file: Option<&FileDescriptor>) -> Self {
        let Some(file) = file else {
            return Self::NoFile;
        };
        match file.category() {
            Category::Audio => Self::ShowingAudio,
            Category::Image => Self::ShowingImage,
            Category::Text => Self::ShowingText,
            Category::Unknown => {
                let ext = extension(&file.name);
                Self::Unsupported {
                    name: file.name.clone(),
                    extension: if ext.is_empty() {
                        UNKNOWN_EXTENSION_LABEL.to_string()
                    } else {
                        ext
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileDescriptor {
        FileDescriptor::uploaded(name, format!("blob:{name}"))
    }

    #[test]
    fn test_no_selection() {
        assert_eq!(ViewerState::for_file(None), ViewerState::NoFile);
    }

    #[test]
    fn test_dispatch_by_category() {
        assert_eq!(ViewerState::for_file(Some(&file("a.opus"))), ViewerState::ShowingAudio);
        assert_eq!(ViewerState::for_file(Some(&file("a.SVG"))), ViewerState::ShowingImage);
        assert_eq!(ViewerState::for_file(Some(&file("main.rs"))), ViewerState::ShowingText);
    }

    #[test]
    fn test_unsupported_shows_extension() {
        assert_eq!(
            ViewerState::for_file(Some(&file("data.xyz"))),
            ViewerState::Unsupported {
                name: "data.xyz".into(),
                extension: "xyz".into(),
            }
        );
        assert_eq!(
            ViewerState::for_file(Some(&file("README"))),
            ViewerState::Unsupported {
                name: "README".into(),
                extension: "unknown".into(),
            }
        );
    }

    #[test]
    fn test_type_hint_does_not_override_name() {
        let mut descriptor = file("photo.png");
        descriptor.kind = Category::Text;
        assert_eq!(ViewerState::for_file(Some(&descriptor)), ViewerState::ShowingImage);
    }
}
