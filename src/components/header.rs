//! Page header with the application title.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_SUBTITLE, APP_TITLE};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <h1 class=css::title>
                <span class=css::titleIcon><Icon icon=ic::FOLDER_OPEN /></span>
                {APP_TITLE}
            </h1>
            <p class=css::subtitle>{APP_SUBTITLE}</p>
        </header>
    }
}
