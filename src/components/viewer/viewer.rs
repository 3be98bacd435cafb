//! Preview area dispatcher.
//!
//! Picks the viewer for the current selection. The viewer component stays
//! mounted while consecutive selections map to the same kind; only its
//! source and name signals change.

use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::ViewerState;

use super::{AudioPlayer, ImageViewer, TextViewer};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn FileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = ctx.selected;

    let state = Memo::new(move |_| selected.with(|file| ViewerState::for_file(file.as_ref())));

    let name = Signal::derive(move || {
        selected.with(|file| file.as_ref().map(|f| f.name.clone()).unwrap_or_default())
    });
    let url = Signal::derive(move || {
        selected.with(|file| file.as_ref().map(|f| f.url.clone()).unwrap_or_default())
    });
    let content =
        Signal::derive(move || selected.with(|file| file.as_ref().and_then(|f| f.content.clone())));

    move || match state.get() {
        ViewerState::NoFile => view! {
            <div class=css::placeholder>
                <span class=css::placeholderIcon><Icon icon=ic::FOLDER_OPEN /></span>
                <p class=css::placeholderText>"Select a file to view"</p>
            </div>
        }
        .into_any(),
        ViewerState::ShowingAudio => view! {
            <div class=css::viewerContainer>
                <AudioPlayer src=url name=name />
            </div>
        }
        .into_any(),
        ViewerState::ShowingImage => view! {
            <div class=css::viewerContainer>
                <ImageViewer src=url name=name />
            </div>
        }
        .into_any(),
        ViewerState::ShowingText => view! {
            <div class=css::viewerContainer>
                <TextViewer content=content name=name />
            </div>
        }
        .into_any(),
        ViewerState::Unsupported { name: file_name, extension } => view! {
            <div class=css::viewerContainer>
                <div class=css::unsupported>
                    <span class=css::unsupportedIcon><Icon icon=ic::FILE /></span>
                    <p class=css::unsupportedText>
                        "Preview not available for " <strong>{file_name}</strong>
                    </p>
                    <p class=css::unsupportedSubtext>"File type: " {extension}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}
