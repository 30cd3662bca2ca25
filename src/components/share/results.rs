//! File-sharing result area.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileEntry, FileResult};
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/share/share.module.css");

/// Selected or uploaded files, or the failure message.
#[component]
pub fn FileResults() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let files = ctx.controller.files();

    view! {
        <div class=css::result>
            {move || match files.get() {
                FileResult::Empty => ().into_any(),
                FileResult::Error(message) => view! {
                    <p class=css::error>
                        <Icon icon=ic::ERROR />
                        {message}
                    </p>
                }
                .into_any(),
                FileResult::Listing { kind, entries } => view! {
                    <p class=css::heading>{kind.heading()}</p>
                    {entries
                        .into_iter()
                        .map(|entry| view! { <FileRow entry=entry /> })
                        .collect_view()}
                }
                .into_any(),
            }}
        </div>
    }
}

/// One file: name (a link once uploaded), size, and thumbnail for images.
#[component]
fn FileRow(entry: FileEntry) -> impl IntoView {
    let FileEntry {
        name,
        size,
        is_image,
        link,
        preview,
    } = entry;

    let icon = if is_image { ic::FILE_IMAGE } else { ic::FILE };
    let alt = name.clone();

    let label = match link {
        Some(url) => view! {
            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                <Icon icon=ic::LINK />
                {name}
            </a>
        }
        .into_any(),
        None => view! { <span class=css::fileName>{name}</span> }.into_any(),
    };

    view! {
        <div class=css::uploadedFile>
            <div class=css::fileInfo>
                <span class=css::fileIcon><Icon icon=icon /></span>
                {label}
                <span class=css::fileSize>{format_size(size)}</span>
            </div>
            {preview.map(|src| view! { <img class=css::thumbnailSmall src=src alt=alt /> })}
        </div>
    }
}
