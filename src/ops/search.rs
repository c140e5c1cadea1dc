//! Search Folders
//!
//! Read-only: results are a flat list from the backend and never touch the tree.

use leptos::prelude::*;

use crate::api::FolderApi;
use crate::busy::BusyGuard;
use crate::error::ApiError;
use crate::models::Folder;

#[derive(Clone, Copy)]
pub struct SearchFolders {
    pub query: RwSignal<String>,
    pub results: RwSignal<Vec<Folder>>,
    pub searching: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl SearchFolders {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            results: RwSignal::new(Vec::new()),
            searching: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Run the current `query`; a blank query clears the results without a call
    pub async fn run(&self, api: &dyn FolderApi) {
        let query = self.query.get_untracked();
        let query = query.trim();
        if query.is_empty() {
            self.clear();
            return;
        }

        let _busy = BusyGuard::hold(self.searching);
        self.error.set(None);
        match api.search_folders(query).await {
            Ok(found) => {
                log::debug!("Search {:?} matched {} folders", query, found.len());
                self.results.set(found);
            }
            Err(e) => {
                log::error!("Search failed: {}", e);
                self.error.set(Some(e));
            }
        }
    }

    pub fn clear(&self) {
        self.query.set(String::new());
        self.results.set(Vec::new());
        self.error.set(None);
    }
}

impl Default for SearchFolders {
    fn default() -> Self {
        Self::new()
    }
}
