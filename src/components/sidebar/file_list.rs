//! Selectable file entries.

use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::FileDescriptor;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sidebar/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Demos first, then uploads in the order they were added
    let entries = Signal::derive(move || {
        ctx.files
            .with(|library| library.entries().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class=css::fileList role="listbox" aria-label="File list">
            <For
                each=move || entries.get()
                key=|file| (file.name.clone(), file.url.clone())
                children=move |file| view! { <FileListItem file=file /> }
            />
        </div>
    }
}

#[component]
fn FileListItem(file: FileDescriptor) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = file.name.clone();
    let title = name.clone();
    let icon = ic::for_category(file.kind);

    let is_selected = Memo::new({
        let name = name.clone();
        move |_| ctx.files.with(|library| library.is_selected(&name))
    });

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::fileItem, css::selected)
        } else {
            css::fileItem.to_string()
        }
    };

    view! {
        <button
            class=item_class
            role="option"
            aria-selected=move || is_selected.get().to_string()
            title=title
            on:click=move |_| ctx.select(file.clone())
        >
            <span class=css::fileIcon><Icon icon=icon /></span>
            <span class=css::fileItemName>{name}</span>
        </button>
    }
}
