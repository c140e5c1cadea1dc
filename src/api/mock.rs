//! Scripted in-memory backend for tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::FolderApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Folder, FolderId, RenamedFolder};

/// A recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchTree,
    Create { name: String, parent_id: Option<FolderId> },
    Rename { id: FolderId, name: String },
    Delete { id: FolderId },
    Search { query: String },
}

/// Optional barrier a call waits on before answering
#[derive(Default)]
struct Gate(RefCell<Option<Rc<Notify>>>);

impl Gate {
    fn install(&self) -> Rc<Notify> {
        let notify = Rc::new(Notify::new());
        *self.0.borrow_mut() = Some(notify.clone());
        notify
    }

    async fn pass(&self) {
        let notify = self.0.borrow().clone();
        if let Some(notify) = notify {
            notify.notified().await;
        }
    }
}

pub struct MockFolderApi {
    tree: RefCell<ApiResult<Vec<Folder>>>,
    created: RefCell<VecDeque<ApiResult<Folder>>>,
    renamed: RefCell<Option<ApiResult<RenamedFolder>>>,
    deleted: RefCell<ApiResult<()>>,
    search: RefCell<ApiResult<Vec<Folder>>>,
    fetch_gate: Gate,
    create_gate: Gate,
    rename_gate: Gate,
    delete_gate: Gate,
    calls: RefCell<Vec<ApiCall>>,
}

impl Default for MockFolderApi {
    fn default() -> Self {
        Self {
            tree: RefCell::new(Ok(Vec::new())),
            created: RefCell::new(VecDeque::new()),
            renamed: RefCell::new(None),
            deleted: RefCell::new(Ok(())),
            search: RefCell::new(Ok(Vec::new())),
            fetch_gate: Gate::default(),
            create_gate: Gate::default(),
            rename_gate: Gate::default(),
            delete_gate: Gate::default(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockFolderApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(self, tree: ApiResult<Vec<Folder>>) -> Self {
        *self.tree.borrow_mut() = tree;
        self
    }

    /// Queue the response for the next create call
    pub fn push_create(&self, response: ApiResult<Folder>) {
        self.created.borrow_mut().push_back(response);
    }

    /// Override rename; by default it echoes the requested name
    pub fn set_rename(&self, response: ApiResult<RenamedFolder>) {
        *self.renamed.borrow_mut() = Some(response);
    }

    pub fn set_delete(&self, response: ApiResult<()>) {
        *self.deleted.borrow_mut() = response;
    }

    pub fn set_search(&self, response: ApiResult<Vec<Folder>>) {
        *self.search.borrow_mut() = response;
    }

    /// Make fetch calls wait until the returned `Notify` is signalled
    pub fn gate_fetches(&self) -> Rc<Notify> {
        self.fetch_gate.install()
    }

    pub fn gate_creates(&self) -> Rc<Notify> {
        self.create_gate.install()
    }

    pub fn gate_renames(&self) -> Rc<Notify> {
        self.rename_gate.install()
    }

    pub fn gate_deletes(&self) -> Rc<Notify> {
        self.delete_gate.install()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

/// A generic failure for scripting error paths
pub fn offline() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

#[async_trait(?Send)]
impl FolderApi for MockFolderApi {
    async fn fetch_tree(&self) -> ApiResult<Vec<Folder>> {
        self.record(ApiCall::FetchTree);
        self.fetch_gate.pass().await;
        self.tree.borrow().clone()
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> ApiResult<Folder> {
        self.record(ApiCall::Create { name: name.to_string(), parent_id });
        self.create_gate.pass().await;
        self.created
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted create".to_string())))
    }

    async fn rename_folder(&self, id: FolderId, name: &str) -> ApiResult<RenamedFolder> {
        self.record(ApiCall::Rename { id, name: name.to_string() });
        self.rename_gate.pass().await;
        match self.renamed.borrow().clone() {
            Some(response) => response,
            None => Ok(RenamedFolder { name: name.to_string() }),
        }
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.record(ApiCall::Delete { id });
        self.delete_gate.pass().await;
        self.deleted.borrow().clone()
    }

    async fn search_folders(&self, query: &str) -> ApiResult<Vec<Folder>> {
        self.record(ApiCall::Search { query: query.to_string() });
        self.search.borrow().clone()
    }
}
