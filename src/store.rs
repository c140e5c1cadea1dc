//! Folder Tree Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `load_folders` is the only code that replaces the tree wholesale; everything
//! else goes through the splice helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FolderApi;
use crate::busy::BusyGuard;
use crate::models::{Folder, FolderId};
use crate::tree;

/// Explorer state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ExplorerState {
    /// Root sequence; subtrees hang off `children`
    pub folders: Vec<Folder>,
    /// Set while the tree is being fetched
    pub loading: bool,
}

/// Type alias for the store
pub type ExplorerStore = Store<ExplorerState>;

/// Create a fresh, empty store not attached to any context
pub fn create_explorer_store() -> ExplorerStore {
    Store::new(ExplorerState::default())
}

/// Create a store and provide it to the current component subtree
pub fn provide_explorer_store() -> ExplorerStore {
    let store = create_explorer_store();
    provide_context(store);
    store
}

/// Get the explorer store from context
pub fn use_explorer_store() -> ExplorerStore {
    expect_context::<ExplorerStore>()
}

pub fn dispose_explorer_store(store: ExplorerStore) {
    store.dispose();
}

/// Fetch the full tree and swap it in
///
/// Failures are logged and leave the previous tree in place.
pub async fn load_folders(store: ExplorerStore, api: &dyn FolderApi) {
    let _busy = BusyGuard::hold(store.loading());

    match api.fetch_tree().await {
        Ok(folders) => {
            for violation in tree::check_consistency(&folders) {
                log::warn!("Inconsistent folder tree from backend: {:?}", violation);
            }
            log::info!("Loaded {} folders", tree::count_folders(&folders));
            *store.folders().write() = folders;
        }
        Err(e) => {
            log::error!("Fetch error: {}", e);
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Add a folder under its parent (or at root). False if the parent is gone.
pub fn store_append_folder(store: &ExplorerStore, folder: Folder) -> bool {
    let folders = store.folders();
    let mut guard = folders.write();
    tree::append_folder(&mut guard, folder)
}

/// Remove a folder and its subtree from its parent (or from root)
pub fn store_remove_folder(store: &ExplorerStore, id: FolderId, parent_id: Option<FolderId>) -> bool {
    let folders = store.folders();
    let mut guard = folders.write();
    tree::remove_folder(&mut guard, id, parent_id)
}

/// Update a folder's name in place
pub fn store_rename_folder(store: &ExplorerStore, id: FolderId, name: &str) -> bool {
    let folders = store.folders();
    let mut guard = folders.write();
    tree::rename_folder(&mut guard, id, name)
}

/// Untracked copy of a single node
pub fn store_find_folder(store: &ExplorerStore, id: FolderId) -> Option<Folder> {
    store
        .folders()
        .with_untracked(|folders| tree::find_folder(folders, id).cloned())
}
