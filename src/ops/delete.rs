//! Delete Folder

use leptos::prelude::*;

use crate::api::FolderApi;
use crate::busy::BusyGuard;
use crate::error::ApiError;
use crate::models::Folder;
use crate::store::{store_remove_folder, ExplorerStore};

#[derive(Clone, Copy)]
pub struct DeleteFolder {
    store: ExplorerStore,
    pub deleting: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl DeleteFolder {
    pub fn new(store: ExplorerStore) -> Self {
        Self {
            store,
            deleting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Delete `target` on the backend, then drop it (and its subtree) locally
    ///
    /// Returns whether the backend accepted the delete. The server decides what
    /// happens to descendants; locally they disappear with their ancestor.
    pub async fn run(&self, api: &dyn FolderApi, target: &Folder) -> bool {
        let _busy = BusyGuard::hold(self.deleting);
        self.error.set(None);

        match api.delete_folder(target.id).await {
            Ok(()) => {
                store_remove_folder(&self.store, target.id, target.parent_id);
                true
            }
            Err(e) => {
                log::error!("Delete failed: {}", e);
                self.error.set(Some(e));
                false
            }
        }
    }
}
