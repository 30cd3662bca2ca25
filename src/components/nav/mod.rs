//! Header and mode navigation.
//!
//! Shows the application name and one control per [`Mode`]. Exactly one
//! control carries the active style: the one matching the page state.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::Mode;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Page header with the mode switch.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Name, tagline, icon + label controls |
/// | Mobile (< 768px) | Name, icon-only controls |
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <header class=css::bar>
            <div class=css::brand>
                <span class=css::name>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </div>

            <nav class=css::nav>
                {Mode::ALL
                    .into_iter()
                    .map(|mode| {
                        let is_active = ctx.controller.is_active(mode);
                        view! {
                            <button
                                class=move || {
                                    if is_active.get() {
                                        format!("{} {}", css::navButton, css::active)
                                    } else {
                                        css::navButton.to_string()
                                    }
                                }
                                aria-pressed=move || is_active.get().to_string()
                                on:click=move |_| ctx.navigate(mode)
                                title=mode.label()
                            >
                                <span class=css::navIcon><Icon icon=ic::mode_icon(mode) /></span>
                                <span class=css::navLabel>{mode.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
