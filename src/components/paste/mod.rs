//! Pastebin section.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{PASTE_PLACEHOLDER, messages};
use crate::models::PasteResult;

stylance::import_crate_style!(css, "src/components/paste/paste.module.css");

/// Text editor, save button and the paste link or error.
#[component]
pub fn Pastebin() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let controller = ctx.controller;

    let (content, set_content) = signal(String::new());
    let result = controller.paste();

    let handle_input = move |ev: ev::Event| {
        set_content.set(event_target_value(&ev));
    };

    let submit = move |_: ev::MouseEvent| {
        let text = content.get_untracked();
        spawn_local(controller.submit_paste(&text));
    };

    view! {
        <textarea
            class=css::editor
            rows="12"
            placeholder=PASTE_PLACEHOLDER
            prop:value=content
            on:input=handle_input
        ></textarea>

        <div class=css::actions>
            <button class=css::submit on:click=submit>
                <Icon icon=ic::PASTE />
                "Save Paste"
            </button>
        </div>

        <div class=css::result>
            {move || match result.get() {
                PasteResult::Idle => ().into_any(),
                PasteResult::Link(url) => {
                    let href = url.clone();
                    view! {
                        <p>
                            {messages::PASTE_URL_LABEL} " "
                            <a class=css::link href=href target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::LINK />
                                {url}
                            </a>
                        </p>
                    }
                    .into_any()
                }
                PasteResult::Error(message) => view! {
                    <p class=css::error>
                        <Icon icon=ic::ERROR />
                        {message}
                    </p>
                }
                .into_any(),
            }}
        </div>
    }
}
