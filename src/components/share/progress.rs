//! Upload progress bar.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/share/share.module.css");

/// Progress container, visible while an upload is in flight.
#[component]
pub fn UploadProgressBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let progress = ctx.controller.progress();

    view! {
        <Show when=move || progress.get().visible>
            <div class=css::progressContainer>
                <div class=css::progressTrack>
                    <div class=css::progressBar style:width=move || progress.get().label()></div>
                </div>
                <span class=css::progressText>{move || progress.get().label()}</span>
            </div>
        </Show>
    }
}
