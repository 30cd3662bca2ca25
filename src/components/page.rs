//! Main page component.
//!
//! Container for the header and the three sections. All sections stay
//! mounted and are toggled with `display`, so the paste editor keeps its
//! text while another section is shown.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::faq::Faq;
use crate::components::nav::NavBar;
use crate::components::paste::Pastebin;
use crate::components::share::FileSharing;
use crate::models::Mode;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Page layout: header, then exactly one visible section.
#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let controller = ctx.controller;

    // `display` value of the section for `mode`
    let display = move |mode: Mode| {
        let active = controller.is_active(mode);
        move || if active.get() { "block" } else { "none" }
    };

    view! {
        <div class=css::page>
            <NavBar />

            <main class=css::main>
                <section class=css::section style:display=display(Mode::FileSharing)>
                    <FileSharing />
                </section>
                <section class=css::section style:display=display(Mode::Pastebin)>
                    <Pastebin />
                </section>
                <section class=css::section style:display=display(Mode::Faq)>
                    <Faq />
                </section>
            </main>
        </div>
    }
}
