//! FAQ section.

use leptos::prelude::*;

use crate::config::FAQ_TEXT;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/faq/faq.module.css");

/// Static help content rendered from Markdown.
#[component]
pub fn Faq() -> impl IntoView {
    let html = markdown_to_html(FAQ_TEXT);

    view! { <article class=css::faq inner_html=html></article> }
}
