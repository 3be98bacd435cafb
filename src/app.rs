//! Root application module.
//!
//! Contains the main App component, the AppContext holding the file
//! selection, and the page layout (header, sidebar, preview area).

use leptos::prelude::*;

use filepeek_core::{FileDescriptor, FileLibrary};

use crate::components::{FileViewer, Header, Sidebar};
use crate::config::demo_library;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()` by the sidebar and the preview area.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Demo entries, uploads and the current selection.
    pub files: RwSignal<FileLibrary>,

    /// The selected descriptor; only notifies when the selection changes.
    pub selected: Memo<Option<FileDescriptor>>,
}

impl AppContext {
    /// Creates the context with the embedded demo files and no selection.
    pub fn new() -> Self {
        let files = RwSignal::new(demo_library());
        let selected = Memo::new(move |_| files.with(|library| library.selected().cloned()));
        Self { files, selected }
    }

    /// Replace the selection.
    pub fn select(&self, file: FileDescriptor) {
        self.files.update(|library| library.select(file));
    }

    /// Add a finished upload to the sidebar and select it.
    ///
    /// Releases the blob URL of an earlier upload with the same name.
    pub fn add_upload(&self, file: FileDescriptor) {
        let replaced = self
            .files
            .try_update(|library| library.add_upload(file))
            .flatten();
        if let Some(old) = replaced {
            dom::revoke_object_url(&old.url);
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the header, sidebar and preview area
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <div class=css::fallbackBody>
                        <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                        <p class=css::fallbackText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::fallbackDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::fallbackButton
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <div class=css::app>
                <Header />
                <div class=css::content>
                    <Sidebar />
                    <main class=css::main>
                        <FileViewer />
                    </main>
                </div>
            </div>
        </ErrorBoundary>
    }
}
