#![allow(warnings)]
//! Folder Explorer Frontend Entry Point

mod api;
mod app;
mod busy;
mod components;
mod config;
mod context;
mod context_menu;
mod error;
mod exclusive;
mod logger;
mod models;
mod ops;
mod store;
mod tree;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use crate::api::HttpFolderApi;
use crate::config::ExplorerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = ExplorerConfig::from_build_env();
    let _ = logger::init(config.log_level);
    log::info!("Folder backend at {}", config.base_url);

    match HttpFolderApi::new(config) {
        Ok(api) => mount_to_body(move || view! { <App api=Rc::new(api) /> }),
        Err(e) => log::error!("Failed to build HTTP client: {}", e),
    }
}
