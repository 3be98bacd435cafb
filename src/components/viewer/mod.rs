//! File preview components.
//!
//! - [`FileViewer`] - Chooses a viewer for the selected file
//! - [`AudioPlayer`] - Play/pause, time display and seekable progress
//! - [`ImageViewer`] - Image with stepped zoom
//! - [`TextViewer`] - Line count and raw content

mod audio;
mod hook;
mod image;
mod text;
mod viewer;

pub use audio::AudioPlayer;
pub use image::ImageViewer;
pub use text::TextViewer;
pub use viewer::FileViewer;

use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::PreviewError;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/notice.module.css");

/// Inline failure message shown in place of a media viewer.
#[component]
fn ErrorNotice(error: PreviewError) -> impl IntoView {
    let detail = error.detail().map(str::to_string);

    view! {
        <div class=css::error role="alert">
            <span class=css::errorIcon><Icon icon=ic::WARNING /></span>
            <span class=css::errorText>{error.to_string()}</span>
            {detail.map(|detail| view! { <span class=css::errorDetail>{detail}</span> })}
        </div>
    }
}
