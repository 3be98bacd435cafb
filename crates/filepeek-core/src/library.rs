//! File descriptors and the selection host.
//!
//! [`FileLibrary`] owns the sidebar list (demo entries followed by uploads)
//! and the current selection. Descriptors are never edited in place; a new
//! selection replaces the previous one wholesale.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ManifestError;

// =============================================================================
// FileDescriptor
// =============================================================================

/// A selectable file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileDescriptor {
    /// Display name, also used for classification.
    pub name: String,
    /// Locator for the bytes (static path or blob URL).
    pub url: String,
    /// Category hint recorded when the descriptor was created.
    ///
    /// Only used for sidebar icons. Viewers always reclassify by name.
    #[serde(rename = "type", default)]
    pub kind: Category,
    /// Decoded text, present only for text files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileDescriptor {
    /// Descriptor for a local upload, categorized with the upload rules.
    pub fn uploaded(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: Category::for_upload(&name),
            name,
            url: url.into(),
            content: None,
        }
    }

    /// Attach decoded text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Category used to pick a viewer.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

// =============================================================================
// Demo Manifest
// =============================================================================

#[derive(Deserialize)]
struct DemoManifest {
    #[serde(default, rename = "file")]
    files: Vec<FileDescriptor>,
}

/// Parse a demo manifest (`[[file]]` tables).
pub fn parse_manifest(source: &str) -> Result<Vec<FileDescriptor>, ManifestError> {
    let manifest: DemoManifest = toml::from_str(source)?;
    for (i, file) in manifest.files.iter().enumerate() {
        if manifest.files[..i].iter().any(|f| f.name == file.name) {
            return Err(ManifestError::DuplicateName(file.name.clone()));
        }
    }
    Ok(manifest.files)
}

// =============================================================================
// FileLibrary
// =============================================================================

/// Sidebar entries plus the current selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileLibrary {
    demos: Vec<FileDescriptor>,
    uploads: Vec<FileDescriptor>,
    selected: Option<FileDescriptor>,
}

impl FileLibrary {
    pub fn new(demos: Vec<FileDescriptor>) -> Self {
        Self {
            demos,
            ..Self::default()
        }
    }

    /// Build a library from a demo manifest.
    pub fn from_manifest(source: &str) -> Result<Self, ManifestError> {
        parse_manifest(source).map(Self::new)
    }

    pub fn demos(&self) -> &[FileDescriptor] {
        &self.demos
    }

    pub fn uploads(&self) -> &[FileDescriptor] {
        &self.uploads
    }

    /// All sidebar entries, demo files first.
    pub fn entries(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.demos.iter().chain(self.uploads.iter())
    }

    pub fn selected(&self) -> Option<&FileDescriptor> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, file: FileDescriptor) {
        self.selected = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether the sidebar should highlight an entry with this name.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_ref().is_some_and(|f| f.name == name)
    }

    /// Record an upload and select it.
    ///
    /// An earlier upload with the same name is replaced and returned, so the
    /// caller can release its blob URL.
    pub fn add_upload(&mut self, file: FileDescriptor) -> Option<FileDescriptor> {
        let replaced = match self.uploads.iter().position(|f| f.name == file.name) {
            Some(index) => Some(std::mem::replace(&mut self.uploads[index], file.clone())),
            None => {
                self.uploads.push(file.clone());
                None
            }
        };
        self.selected = Some(file);
        replaced
    }
}
