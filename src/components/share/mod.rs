//! File-sharing section.

mod drop_area;
mod progress;
mod results;

use leptos::prelude::*;

use drop_area::DropArea;
use progress::UploadProgressBar;
use results::FileResults;

/// Drop area, upload progress and the resulting file list.
#[component]
pub fn FileSharing() -> impl IntoView {
    view! {
        <DropArea />
        <UploadProgressBar />
        <FileResults />
    }
}
