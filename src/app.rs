//! Root application module.
//!
//! Contains the main App component, AppContext definition,
//! and application-level setup logic following Leptos conventions.

use leptos::error::Errors;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::Page;
use crate::core::UploadPasteController;
use crate::models::Mode;
use crate::utils::HttpTransport;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Controller wired to the real endpoints.
pub type PageController = UploadPasteController<HttpTransport>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// It is constructed once per page load and lives until navigation away.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page state and the upload/paste operations.
    pub controller: PageController,
}

impl AppContext {
    /// Creates the context with the mode taken from the URL hash.
    pub fn new() -> Self {
        Self {
            controller: UploadPasteController::new(HttpTransport::default(), Mode::current()),
        }
    }

    /// Select a section and record it in browser history.
    pub fn navigate(&self, mode: Mode) {
        self.controller.switch_mode(mode);
        mode.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow back/forward navigation between sections.
#[cfg(target_arch = "wasm32")]
fn setup_hash_listener(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        ctx.controller.switch_mode(Mode::current());
    }) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Page component
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    setup_hash_listener(ctx);

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorPage errors=errors /> }>
            <Page />
        </ErrorBoundary>
    }
}

/// Full-page fallback listing the render errors, with a reload button.
#[component]
fn ErrorPage(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = dom::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::fallback>
            <div class=css::panel>
                <h1 class=css::title>"Something went wrong"</h1>
                <p class=css::hint>"An unexpected error occurred. Please try reloading the page."</p>
                <details class=css::details>
                    <summary>"Error details"</summary>
                    <ul class=css::errors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()}
                    </ul>
                </details>
                <button class=css::reload on:click=reload>"Reload Page"</button>
            </div>
        </div>
    }
}
