//! Explorer Context
//!
//! Store, operations and UI slots shared via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiHandle, FolderApi};
use crate::context_menu::ContextMenu;
use crate::models::Folder;
use crate::ops::{CreateFolder, DeleteFolder, RenameFolder, SearchFolders};
use crate::store::{load_folders, ExplorerStateStoreFields, ExplorerStore};
use crate::tree::{self, FolderIndex};

/// Explorer-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ExplorerContext {
    pub store: ExplorerStore,
    pub api: ApiHandle,
    pub create: CreateFolder,
    pub delete: DeleteFolder,
    pub rename: RenameFolder,
    pub search: SearchFolders,
    pub context_menu: ContextMenu,
    /// Id lookup rebuilt once per tree change and shared by every row
    pub index: Memo<FolderIndex>,
}

impl ExplorerContext {
    pub fn new(store: ExplorerStore, api: Rc<dyn FolderApi>) -> Self {
        Self {
            store,
            api: ApiHandle::new(api),
            create: CreateFolder::new(store),
            delete: DeleteFolder::new(store),
            rename: RenameFolder::new(store),
            search: SearchFolders::new(),
            context_menu: ContextMenu::new(),
            index: Memo::new(move |_| store.folders().with(|folders| tree::index_folders(folders))),
        }
    }

    /// Fetch the whole tree in the background
    pub fn reload(&self) {
        let store = self.store;
        let api = self.api.get();
        spawn_local(async move {
            load_folders(store, api.as_ref()).await;
        });
    }

    /// Create under `parent` and drop straight into rename mode on the result
    pub fn create_and_rename(&self, parent: Option<Folder>) {
        let ctx = *self;
        let api = self.api.get();
        spawn_local(async move {
            if let Some(folder) = ctx.create.run(api.as_ref(), parent.as_ref()).await {
                ctx.rename.start(&folder);
            }
        });
    }

    pub fn delete_folder(&self, target: Folder) {
        let ctx = *self;
        let api = self.api.get();
        spawn_local(async move {
            ctx.delete.run(api.as_ref(), &target).await;
        });
    }

    pub fn submit_rename(&self, folder: Folder) {
        let ctx = *self;
        let api = self.api.get();
        spawn_local(async move {
            ctx.rename.submit(api.as_ref(), &folder).await;
        });
    }

    pub fn run_search(&self) {
        let ctx = *self;
        let api = self.api.get();
        spawn_local(async move {
            ctx.search.run(api.as_ref()).await;
        });
    }
}

/// Get the explorer context
pub fn use_explorer() -> ExplorerContext {
    expect_context::<ExplorerContext>()
}
