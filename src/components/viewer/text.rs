//! Plain text viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::text::{display_text, line_count, line_count_label};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/text.module.css");

#[component]
pub fn TextViewer(
    #[prop(into)] content: Signal<Option<String>>,
    #[prop(into)] name: Signal<String>,
) -> impl IntoView {
    let label = Memo::new(move |_| content.with(|c| line_count_label(line_count(c.as_deref()))));

    view! {
        <div class=css::container>
            <div class=css::header>
                <span class=css::fileIcon><Icon icon=ic::FILE_TEXT /></span>
                <span class=css::fileNameText>{move || name.get()}</span>
                <span class=css::lineCount>{move || label.get()}</span>
            </div>
            <div class=css::codeContainer>
                <pre class=css::code>
                    <code>{move || content.with(|c| display_text(c.as_deref()).to_string())}</code>
                </pre>
            </div>
        </div>
    }
}
