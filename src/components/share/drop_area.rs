//! Drop area and hidden file picker.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::files_from_list;

stylance::import_crate_style!(css, "src/components/share/share.module.css");

/// Click-or-drop target. Both paths replace the selection and upload it.
#[component]
pub fn DropArea() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let controller = ctx.controller;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let dragging = controller.dragging();

    let start = move |files: Vec<web_sys::File>| {
        spawn_local(controller.select_files(files));
    };

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    // Enter and leave fire for every child crossed; the controller counts them
    let on_dragenter = move |ev: ev::DragEvent| {
        ev.prevent_default();
        controller.drag_enter();
    };

    let on_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
    };

    let on_dragleave = move |_: ev::DragEvent| {
        controller.drag_leave();
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        controller.end_drag();
        start(files_from_list(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_change = move |_: ev::Event| {
        let Some(input) = input_ref.get() else { return };
        start(files_from_list(input.files()));
        // Picking the same files again must fire `change` again
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                if dragging.get() {
                    format!("{} {}", css::dropArea, css::dragging)
                } else {
                    css::dropArea.to_string()
                }
            }
            on:click=open_picker
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
            <p class=css::dropText>"Drag & drop files here, or click to select"</p>
        </div>

        // Outside the drop area so its click does not bubble back
        <input
            node_ref=input_ref
            type="file"
            multiple=true
            class=css::fileInput
            on:change=on_change
        />
    }
}
