//! Nota Fiscal Web App (Leptos + WASM)

pub mod api;
mod app;
mod clipboard;
pub mod components;
pub mod config;
mod controllers;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}
