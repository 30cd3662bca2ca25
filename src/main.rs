mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{APP_NAME, APP_ROOT_ID};

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(APP_ROOT_ID)
        .unwrap_or_else(|| panic!("Failed to find #{} element", APP_ROOT_ID))
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
    utils::dom::console_log(&format!("{} client mounted", APP_NAME));
}
