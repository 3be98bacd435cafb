use leptos::prelude::*;

use super::file_list::FileList;
use super::upload::UploadButton;
use crate::config::SIDEBAR_TITLE;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class=css::sidebar aria-label="Files">
            <div class=css::sidebarHeader>
                <span class=css::sidebarTitle>{SIDEBAR_TITLE}</span>
                <UploadButton />
            </div>
            <FileList />
        </aside>
    }
}
