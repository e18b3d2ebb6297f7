//! Creative Coding Portfolio - Yew WASM Frontend
//!
//! This crate provides the web UI: a home grid of weekly projects and a
//! detail page per week.

mod app;
mod components;
mod config;
mod pages;

pub use app::{App, Route};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let store = weeks_content::store();
    match store.validate() {
        Ok(()) => log::info!(
            "Loaded {} weeks ({:?} to {:?})",
            store.len(),
            store.min_id(),
            store.max_id()
        ),
        Err(e) => log::warn!("Week content failed validation: {}", e),
    }

    yew::Renderer::<App>::new().render();
}
