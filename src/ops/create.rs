//! Create Folder
//!
//! Asks the backend for a new "Untitled" folder and splices the confirmed result
//! into the tree. Nothing is inserted before the server answers.

use leptos::prelude::*;

use crate::api::FolderApi;
use crate::busy::BusyGuard;
use crate::error::ApiError;
use crate::models::{Folder, UNTITLED_FOLDER};
use crate::store::{store_append_folder, ExplorerStore};

#[derive(Clone, Copy)]
pub struct CreateFolder {
    store: ExplorerStore,
    /// Set while a create call is in flight
    pub creating: RwSignal<bool>,
    /// Last failure, cleared when the next attempt starts
    pub error: RwSignal<Option<ApiError>>,
}

impl CreateFolder {
    pub fn new(store: ExplorerStore) -> Self {
        Self {
            store,
            creating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Create a folder under `parent`, or at root level when `None`
    ///
    /// The parent is looked up again once the call resolves. If it was deleted in
    /// the meantime the new folder is returned but never shows up in the tree.
    /// Only one create runs at a time; a second request while one is in flight
    /// is ignored.
    pub async fn run(&self, api: &dyn FolderApi, parent: Option<&Folder>) -> Option<Folder> {
        if self.creating.get_untracked() {
            log::debug!("Create already in flight, ignoring");
            return None;
        }
        let _busy = BusyGuard::hold(self.creating);
        self.error.set(None);
        let parent_id = parent.map(|p| p.id);

        match api.create_folder(UNTITLED_FOLDER, parent_id).await {
            Ok(created) => {
                let folder = Folder {
                    parent_id,
                    children: Vec::new(),
                    ..created
                };
                store_append_folder(&self.store, folder.clone());
                Some(folder)
            }
            Err(e) => {
                log::error!("Failed to create folder: {}", e);
                self.error.set(Some(e));
                None
            }
        }
    }
}
