//! Context Menu State
//!
//! One context menu for the whole tree. Each node that opens it registers a
//! closer; opening the menu on another node closes the previous node first.

use leptos::prelude::*;

use crate::exclusive::ExclusiveRegistry;
use crate::models::{Folder, FolderId};

/// Cursor position the menu was opened at
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy)]
pub struct ContextMenu {
    slot: StoredValue<ExclusiveRegistry<FolderId>, LocalStorage>,
    /// Folder the menu acts on
    pub target: RwSignal<Option<Folder>>,
    pub position: RwSignal<MenuPosition>,
    pub visible: RwSignal<bool>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            slot: StoredValue::new_local(ExclusiveRegistry::new()),
            target: RwSignal::new(None),
            position: RwSignal::new(MenuPosition::default()),
            visible: RwSignal::new(false),
        }
    }

    fn registry(&self) -> ExclusiveRegistry<FolderId> {
        self.slot.get_value()
    }

    /// Open on `folder` at the cursor; any other node's menu closes first
    pub fn open(&self, folder: Folder, x: i32, y: i32, on_close: impl FnOnce() + 'static) {
        self.registry().activate(folder.id, on_close);
        self.target.set(Some(folder));
        self.position.set(MenuPosition { x, y });
        self.visible.set(true);
    }

    /// Close whatever is open; safe to call when nothing is
    pub fn close(&self) {
        self.registry().clear();
        self.visible.set(false);
    }

    pub fn is_open_for(&self, id: FolderId) -> bool {
        self.registry().is_active(&id)
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_open_records_target_and_position() {
        let menu = ContextMenu::new();
        menu.open(Folder::new(1, "Root", None), 40, 90, || {});

        assert!(menu.visible.get_untracked());
        assert_eq!(menu.target.get_untracked().map(|f| f.id), Some(1));
        assert_eq!(menu.position.get_untracked(), MenuPosition { x: 40, y: 90 });
        assert!(menu.is_open_for(1));
    }

    #[test]
    fn test_opening_another_node_closes_previous() {
        let menu = ContextMenu::new();
        let closed = Rc::new(RefCell::new(Vec::new()));

        let log = closed.clone();
        menu.open(Folder::new(1, "A", None), 0, 0, move || log.borrow_mut().push(1));
        let log = closed.clone();
        menu.open(Folder::new(2, "B", None), 5, 5, move || log.borrow_mut().push(2));

        assert_eq!(*closed.borrow(), vec![1]);
        assert!(menu.is_open_for(2));
        assert!(!menu.is_open_for(1));
        assert_eq!(menu.target.get_untracked().map(|f| f.id), Some(2));
    }

    #[test]
    fn test_outside_click_closes() {
        let menu = ContextMenu::new();
        let closed = Rc::new(RefCell::new(0));
        let log = closed.clone();
        menu.open(Folder::new(1, "A", None), 0, 0, move || *log.borrow_mut() += 1);

        menu.close();
        menu.close();

        assert_eq!(*closed.borrow(), 1);
        assert!(!menu.visible.get_untracked());
        assert!(!menu.is_open_for(1));
    }
}
