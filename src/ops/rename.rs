//! Rename Folder
//!
//! One editing target and one draft for the whole tree, so only a single node
//! can be in edit mode at a time.

use leptos::prelude::*;

use crate::api::FolderApi;
use crate::busy::BusyGuard;
use crate::error::ApiError;
use crate::models::{Folder, FolderId};
use crate::store::{store_rename_folder, ExplorerStore};

#[derive(Clone, Copy)]
pub struct RenameFolder {
    store: ExplorerStore,
    /// Folder currently in edit mode
    pub editing_id: RwSignal<Option<FolderId>>,
    /// Draft text bound to the rename input
    pub edit_name: RwSignal<String>,
    pub renaming: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl RenameFolder {
    pub fn new(store: ExplorerStore) -> Self {
        Self {
            store,
            editing_id: RwSignal::new(None),
            edit_name: RwSignal::new(String::new()),
            renaming: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Tracked: re-runs dependents when the editing target changes
    pub fn is_editing(&self, id: FolderId) -> bool {
        self.editing_id.get() == Some(id)
    }

    /// Put `folder` in edit mode, seeding the draft with its name
    pub fn start(&self, folder: &Folder) {
        self.editing_id.set(Some(folder.id));
        self.edit_name.set(folder.name.clone());
    }

    pub fn cancel(&self) {
        self.editing_id.set(None);
    }

    /// Send the trimmed draft to the backend and apply the name it returns
    ///
    /// A blank draft, or one matching the current name once both are trimmed,
    /// just leaves edit mode.
    /// Edit mode is left however the call ends. Returns whether the backend
    /// accepted a new name.
    pub async fn submit(&self, api: &dyn FolderApi, folder: &Folder) -> bool {
        let draft = self.edit_name.get_untracked();
        let name = draft.trim();
        if name.is_empty() || name == folder.name.trim() {
            self.cancel();
            return false;
        }

        let renamed = {
            let _busy = BusyGuard::hold(self.renaming);
            self.error.set(None);
            match api.rename_folder(folder.id, name).await {
                Ok(updated) => {
                    // Use the server's spelling, it may normalize the name
                    store_rename_folder(&self.store, folder.id, &updated.name);
                    true
                }
                Err(e) => {
                    log::error!("Rename failed: {}", e);
                    self.error.set(Some(e));
                    false
                }
            }
        };

        self.cancel();
        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{offline, ApiCall, MockFolderApi};
    use crate::models::RenamedFolder;
    use crate::store::{create_explorer_store, store_find_folder, ExplorerStateStoreFields};

    fn setup() -> (ExplorerStore, RenameFolder, Folder) {
        let store = create_explorer_store();
        *store.folders().write() = vec![Folder::new(1, "Root", None)
            .with_children(vec![Folder::new(2, "Untitled", Some(1))])];
        let target = store_find_folder(&store, 2).unwrap();
        (store, RenameFolder::new(store), target)
    }

    #[test]
    fn test_start_seeds_draft() {
        let (_, rename, target) = setup();
        rename.start(&target);

        assert_eq!(rename.editing_id.get_untracked(), Some(2));
        assert_eq!(rename.edit_name.get_untracked(), "Untitled");
    }

    #[test]
    fn test_only_one_node_in_edit_mode() {
        let (store, rename, target) = setup();
        let root = store_find_folder(&store, 1).unwrap();
        rename.start(&target);
        rename.start(&root);

        assert_eq!(rename.editing_id.get_untracked(), Some(1));
        assert_eq!(rename.edit_name.get_untracked(), "Root");
    }

    #[tokio::test]
    async fn test_server_name_wins() {
        let (store, rename, target) = setup();
        let api = MockFolderApi::new();
        api.set_rename(Ok(RenamedFolder { name: "docs".into() }));

        rename.start(&target);
        rename.edit_name.set("  Docs ".into());
        assert!(rename.submit(&api, &target).await);

        assert_eq!(store_find_folder(&store, 2).unwrap().name, "docs");
        assert_eq!(api.calls(), vec![ApiCall::Rename { id: 2, name: "Docs".into() }]);
        assert_eq!(rename.editing_id.get_untracked(), None);
        assert!(!rename.renaming.get_untracked());
    }

    #[tokio::test]
    async fn test_unchanged_draft_skips_backend() {
        let (store, rename, target) = setup();
        let api = MockFolderApi::new();

        rename.start(&target);
        rename.edit_name.set(" Untitled ".into());
        assert!(!rename.submit(&api, &target).await);

        assert!(api.calls().is_empty());
        assert_eq!(rename.editing_id.get_untracked(), None);
        assert_eq!(store_find_folder(&store, 2).unwrap().name, "Untitled");
    }

    #[tokio::test]
    async fn test_padded_server_name_is_not_resubmitted() {
        let store = create_explorer_store();
        *store.folders().write() = vec![Folder::new(1, " Docs", None)];
        let rename = RenameFolder::new(store);
        let api = MockFolderApi::new();
        let target = store_find_folder(&store, 1).unwrap();

        // Untouched draft
        rename.start(&target);
        assert!(!rename.submit(&api, &target).await);

        // Draft equal to the trimmed name
        rename.start(&target);
        rename.edit_name.set("Docs".into());
        assert!(!rename.submit(&api, &target).await);

        assert!(api.calls().is_empty());
        assert_eq!(store_find_folder(&store, 1).unwrap().name, " Docs");
        assert_eq!(rename.editing_id.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_renaming_raised_while_in_flight() {
        let (store, rename, target) = setup();
        let api = MockFolderApi::new();
        let gate = api.gate_renames();

        rename.start(&target);
        rename.edit_name.set("Docs".into());
        let (renamed, seen) = tokio::join!(rename.submit(&api, &target), async {
            while api.calls().is_empty() {
                tokio::task::yield_now().await;
            }
            let seen = rename.renaming.get_untracked();
            gate.notify_one();
            seen
        });

        assert!(seen);
        assert!(renamed);
        assert!(!rename.renaming.get_untracked());
        assert_eq!(store_find_folder(&store, 2).unwrap().name, "Docs");
    }

    #[tokio::test]
    async fn test_blank_draft_skips_backend() {
        let (store, rename, target) = setup();
        let api = MockFolderApi::new();

        rename.start(&target);
        rename.edit_name.set("   \t".into());
        assert!(!rename.submit(&api, &target).await);

        assert!(api.calls().is_empty());
        assert_eq!(rename.editing_id.get_untracked(), None);
        assert_eq!(store_find_folder(&store, 2).unwrap().name, "Untitled");
    }

    #[tokio::test]
    async fn test_failed_rename_keeps_name_and_exits() {
        let (store, rename, target) = setup();
        let api = MockFolderApi::new();
        api.set_rename(Err(offline()));

        rename.start(&target);
        rename.edit_name.set("Docs".into());
        assert!(!rename.submit(&api, &target).await);

        assert_eq!(store_find_folder(&store, 2).unwrap().name, "Untitled");
        assert_eq!(rename.editing_id.get_untracked(), None);
        assert_eq!(rename.error.get_untracked(), Some(offline()));
    }

    #[tokio::test]
    async fn test_rename_of_deleted_node_is_silent() {
        let (store, rename, _) = setup();
        let api = MockFolderApi::new();
        let gone = Folder::new(99, "Gone", Some(1));

        rename.start(&gone);
        rename.edit_name.set("Still gone".into());
        assert!(rename.submit(&api, &gone).await);

        assert!(store_find_folder(&store, 99).is_none());
        assert_eq!(rename.error.get_untracked(), None);
    }

    #[test]
    fn test_cancel_twice_is_same_as_once() {
        let (_, rename, target) = setup();
        rename.start(&target);

        rename.cancel();
        let once = (rename.editing_id.get_untracked(), rename.edit_name.get_untracked());
        rename.cancel();
        let twice = (rename.editing_id.get_untracked(), rename.edit_name.get_untracked());

        assert_eq!(once, twice);
        assert_eq!(twice.0, None);
    }
}
