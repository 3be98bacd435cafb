//! Image viewer with stepped zoom.

use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::ImageSignal;

use super::ErrorNotice;
use super::hook::use_viewport;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/image.module.css");

#[component]
pub fn ImageViewer(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] name: Signal<String>,
) -> impl IntoView {
    let handle = use_viewport(src);
    let viewport = handle.viewport;

    let error = Memo::new(move |_| viewport.with(|v| v.error().cloned()));
    let is_loading = Memo::new(move |_| viewport.with(|v| v.is_loading()));
    let zoom = Memo::new(move |_| viewport.with(|v| v.zoom()));
    let can_zoom_in = Memo::new(move |_| viewport.with(|v| v.can_zoom_in()));
    let can_zoom_out = Memo::new(move |_| viewport.with(|v| v.can_zoom_out()));

    // Rebuilt per session so a late event from the previous image is ignored
    let image = move || {
        let session = handle.session.get();
        view! {
            <img
                class=css::image
                src=src.get_untracked()
                alt=move || name.get()
                style:display=move || if is_loading.get() { "none" } else { "block" }
                style:transform=move || format!("scale({})", zoom.get().as_factor())
                on:load=move |_| handle.signal(session, ImageSignal::Loaded)
                on:error=move |_| handle.signal(session, ImageSignal::Failed)
            />
        }
    };

    view! {
        <div class=css::container>
            <Show
                when=move || error.get().is_none()
                fallback=move || error.get().map(|err| view! { <ErrorNotice error=err /> })
            >
                <div class=css::fileName>
                    <span class=css::fileIcon><Icon icon=ic::FILE_IMAGE /></span>
                    <span class=css::fileNameText>{move || name.get()}</span>
                </div>

                <div class=css::controls>
                    <button
                        class=css::controlButton
                        title="Zoom out"
                        aria-label="Zoom out"
                        disabled=move || !can_zoom_out.get()
                        on:click=move |_| viewport.update(|v| v.zoom_out())
                    >
                        <Icon icon=ic::ZOOM_OUT />
                    </button>
                    <span class=css::zoomLevel>{move || format!("{}%", zoom.get().percent())}</span>
                    <button
                        class=css::controlButton
                        title="Zoom in"
                        aria-label="Zoom in"
                        disabled=move || !can_zoom_in.get()
                        on:click=move |_| viewport.update(|v| v.zoom_in())
                    >
                        <Icon icon=ic::ZOOM_IN />
                    </button>
                    <button
                        class=css::resetButton
                        title="Reset zoom"
                        on:click=move |_| viewport.update(|v| v.reset_zoom())
                    >
                        <Icon icon=ic::RESET />
                        "Reset"
                    </button>
                </div>

                <div class=css::imageContainer>
                    <Show when=move || is_loading.get()>
                        <div class=css::loading>"Loading..."</div>
                    </Show>
                    {image}
                </div>
            </Show>
        </div>
    }
}
