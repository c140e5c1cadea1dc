//! Folder Explorer App
//!
//! Root component: owns the store and provides the explorer context.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::FolderApi;
use crate::components::FolderExplorer;
use crate::context::ExplorerContext;
use crate::store::{dispose_explorer_store, provide_explorer_store};

#[component]
pub fn App(api: Rc<dyn FolderApi>) -> impl IntoView {
    let store = provide_explorer_store();
    provide_context(ExplorerContext::new(store, api));
    on_cleanup(move || dispose_explorer_store(store));

    view! {
        <main class="explorer-layout">
            <FolderExplorer />
        </main>
    }
}
