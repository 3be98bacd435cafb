//! Upload button backed by a hidden file input.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::UPLOAD_ACCEPT;
use crate::utils::read_upload;

stylance::import_crate_style!(css, "src/components/sidebar/upload.module.css");

#[component]
pub fn UploadButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<html::Input>::new();

    let open_picker = move |_: web_sys::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: web_sys::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let file = input.files().and_then(|list| list.get(0));
        // Picking the same file again must fire `change` again
        input.set_value("");

        let Some(file) = file else {
            return;
        };
        spawn_local(async move {
            match read_upload(file).await {
                Ok(descriptor) => ctx.add_upload(descriptor),
                Err(err) => {
                    web_sys::console::error_1(&format!("Upload failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <button
            class=css::uploadButton
            title="Upload file"
            aria-label="Upload file"
            on:click=open_picker
        >
            <Icon icon=ic::PLUS />
        </button>
        <input
            node_ref=input_ref
            type="file"
            class=css::hiddenInput
            accept=UPLOAD_ACCEPT
            on:change=on_change
        />
    }
}
