//! Frontend Models
//!
//! Data structures matching the folder backend.

use serde::{Deserialize, Serialize};

/// Server-assigned folder identifier
pub type FolderId = u32;

/// Name given to every freshly created folder
pub const UNTITLED_FOLDER: &str = "Untitled";

/// Folder node (matches backend)
///
/// `children` is absent on the wire for nodes whose subtree was never fetched;
/// locally those nodes just have an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    #[serde(default)]
    pub children: Vec<Folder>,
}

impl Folder {
    pub fn new(id: FolderId, name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            children: Vec::new(),
        }
    }

    /// Builder-style helper for assembling nested trees
    pub fn with_children(mut self, children: Vec<Folder>) -> Self {
        self.children = children;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Authoritative result of a rename; the backend may normalize the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFolder {
    pub name: String,
}

// ========================
// Wire Envelopes
// ========================

/// `{ message, data }` wrapper used by most backend responses; only `data` is read
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderArgs<'a> {
    pub name: &'a str,
    pub parent_id: Option<FolderId>,
}

#[derive(Debug, Serialize)]
pub struct RenameFolderArgs<'a> {
    pub id: FolderId,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IdArgs {
    pub id: FolderId,
}
