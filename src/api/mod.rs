//! Folder Backend
//!
//! The remote collaborator every folder operation talks to.

mod http;
#[cfg(test)]
pub mod mock;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::error::ApiResult;
use crate::models::{Folder, FolderId, RenamedFolder};

pub use http::HttpFolderApi;

/// Remote folder service
///
/// Futures are `?Send`: everything runs on the browser's single event loop.
/// Any failure (network, non-2xx, bad body) comes back as `Err`.
#[async_trait(?Send)]
pub trait FolderApi {
    /// Full current tree, roots first, children nested
    async fn fetch_tree(&self) -> ApiResult<Vec<Folder>>;

    /// Server assigns the id; any returned `children` are ignored by callers
    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> ApiResult<Folder>;

    async fn rename_folder(&self, id: FolderId, name: &str) -> ApiResult<RenamedFolder>;

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()>;

    /// Flat list of matches, unrelated to the local tree
    async fn search_folders(&self, query: &str) -> ApiResult<Vec<Folder>>;
}

/// Copyable handle to the backend, provided through context
#[derive(Clone, Copy)]
pub struct ApiHandle(StoredValue<Rc<dyn FolderApi>, LocalStorage>);

impl ApiHandle {
    pub fn new(api: Rc<dyn FolderApi>) -> Self {
        Self(StoredValue::new_local(api))
    }

    pub fn get(&self) -> Rc<dyn FolderApi> {
        self.0.get_value()
    }
}
