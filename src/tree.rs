//! Tree Utilities
//!
//! Recursive lookup and splicing over the nested folder tree.
//! Lookups hand out the live node, never a copy, so edits land in the shared tree.

use std::collections::{HashMap, HashSet};

use crate::models::{Folder, FolderId};

/// Depth-first pre-order search; the first node with a matching id wins
pub fn find_folder(folders: &[Folder], id: FolderId) -> Option<&Folder> {
    for folder in folders {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find_folder(&folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_folder`] with the same traversal order
pub fn find_folder_mut(folders: &mut [Folder], id: FolderId) -> Option<&mut Folder> {
    for folder in folders.iter_mut() {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find_folder_mut(&mut folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Append a folder under its `parent_id`, or to the root sequence when it has none.
/// Returns false if the parent is not in the tree.
pub fn append_folder(root: &mut Vec<Folder>, folder: Folder) -> bool {
    match folder.parent_id {
        None => {
            root.push(folder);
            true
        }
        Some(parent_id) => match find_folder_mut(root, parent_id) {
            Some(parent) => {
                parent.children.push(folder);
                true
            }
            None => false,
        },
    }
}

/// Filter `id` out of its parent's children (or out of the root sequence).
/// Descendants go with it. Returns false if nothing was removed.
pub fn remove_folder(root: &mut Vec<Folder>, id: FolderId, parent_id: Option<FolderId>) -> bool {
    let siblings = match parent_id {
        None => root,
        Some(parent_id) => match find_folder_mut(root, parent_id) {
            Some(parent) => &mut parent.children,
            None => return false,
        },
    };
    let before = siblings.len();
    siblings.retain(|f| f.id != id);
    siblings.len() != before
}

/// Set the name of the node with `id` in place
pub fn rename_folder(root: &mut [Folder], id: FolderId, name: &str) -> bool {
    match find_folder_mut(root, id) {
        Some(folder) => {
            folder.name = name.to_string();
            true
        }
        None => false,
    }
}

/// Total number of nodes in the tree
pub fn count_folders(folders: &[Folder]) -> usize {
    folders
        .iter()
        .map(|f| 1 + count_folders(&f.children))
        .sum()
}

/// What a rendered row needs to know about its folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub child_ids: Vec<FolderId>,
}

pub type FolderIndex = HashMap<FolderId, FolderEntry>;

/// Flatten the tree into an id lookup in one pass
///
/// Duplicate ids keep the first node in pre-order, same as [`find_folder`].
pub fn index_folders(folders: &[Folder]) -> FolderIndex {
    fn fill(folders: &[Folder], index: &mut FolderIndex) {
        for folder in folders {
            index.entry(folder.id).or_insert_with(|| FolderEntry {
                name: folder.name.clone(),
                child_ids: folder.children.iter().map(|c| c.id).collect(),
            });
            fill(&folder.children, index);
        }
    }

    let mut index = FolderIndex::new();
    fill(folders, &mut index);
    index
}

/// Structural problems found by [`check_consistency`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViolation {
    DuplicateId(FolderId),
    ParentMismatch {
        id: FolderId,
        expected: Option<FolderId>,
        found: Option<FolderId>,
    },
}

/// Walk the whole tree and report duplicate ids and `parent_id` values
/// that disagree with where the node actually sits
pub fn check_consistency(folders: &[Folder]) -> Vec<TreeViolation> {
    fn walk(
        folders: &[Folder],
        owner: Option<FolderId>,
        seen: &mut HashSet<FolderId>,
        out: &mut Vec<TreeViolation>,
    ) {
        for folder in folders {
            if !seen.insert(folder.id) {
                out.push(TreeViolation::DuplicateId(folder.id));
            }
            if folder.parent_id != owner {
                out.push(TreeViolation::ParentMismatch {
                    id: folder.id,
                    expected: owner,
                    found: folder.parent_id,
                });
            }
            walk(&folder.children, Some(folder.id), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(folders, None, &mut seen, &mut out);
    out
}
