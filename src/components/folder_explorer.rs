//! Folder Explorer Component
//!
//! Header, search, the folder tree and the shared context menu.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{FolderContextMenu, FolderNode, SearchPanel};
use crate::context::use_explorer;
use crate::store::{use_explorer_store, ExplorerStateStoreFields};

#[component]
pub fn FolderExplorer() -> impl IntoView {
    let ctx = use_explorer();
    let store = use_explorer_store();
    let menu = ctx.context_menu;

    // Load the tree on mount
    Effect::new(move |_| {
        ctx.reload();
    });

    // Any click outside the menu closes it
    let handle = window_event_listener(ev::click, move |_| menu.close());
    on_cleanup(move || handle.remove());

    let root_ids = Memo::new(move |_| {
        store
            .folders()
            .with(|folders| folders.iter().map(|f| f.id).collect::<Vec<_>>())
    });

    let last_error = move || {
        ctx.create
            .error
            .get()
            .or_else(|| ctx.delete.error.get())
            .or_else(|| ctx.rename.error.get())
            .or_else(|| ctx.search.error.get())
    };

    view! {
        <div class="folder-explorer">
            <div class="explorer-header">
                <h3>"Folders"</h3>
                <button
                    class="add-folder-btn"
                    title="New Folder"
                    disabled=move || ctx.create.creating.get()
                    on:click=move |_| ctx.create_and_rename(None)
                >
                    "+"
                </button>
                <button class="reload-btn" title="Reload" on:click=move |_| ctx.reload()>"⟳"</button>
            </div>

            <SearchPanel />

            {move || last_error().map(|e| view! { <div class="error-banner">{e.to_string()}</div> })}

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="tree-content">
                <For
                    each=move || root_ids.get()
                    key=|id| *id
                    children=move |id| view! { <FolderNode id=id depth=0 /> }
                />
            </div>

            <Show when=move || !store.loading().get() && root_ids.with(|ids| ids.is_empty())>
                <div class="no-folders-message">"No folders yet"</div>
            </Show>

            <FolderContextMenu />
        </div>
    }
}
