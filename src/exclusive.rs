//! Exclusive Slots
//!
//! At most one key is active at a time. Activating a different key runs the
//! previous key's closer first, so only one menu (or editor) is ever open.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type CloseFn = Box<dyn FnOnce()>;

struct Entry<K> {
    key: K,
    on_close: CloseFn,
}

/// Single-active-key registry; clones share the same slot
pub struct ExclusiveRegistry<K> {
    active: Rc<RefCell<Option<Entry<K>>>>,
}

impl<K> Clone for ExclusiveRegistry<K> {
    fn clone(&self) -> Self {
        Self {
            active: Rc::clone(&self.active),
        }
    }
}

impl<K> Default for ExclusiveRegistry<K> {
    fn default() -> Self {
        Self {
            active: Rc::new(RefCell::new(None)),
        }
    }
}

impl<K: PartialEq + Clone> ExclusiveRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `key` the active instance
    ///
    /// A different active key is closed before `key` is installed. Re-activating
    /// the current key only swaps its closer.
    pub fn activate(&self, key: K, on_close: impl FnOnce() + 'static) {
        let previous = self.active.borrow_mut().take();
        if let Some(previous) = previous {
            if previous.key != key {
                (previous.on_close)();
            }
        }
        *self.active.borrow_mut() = Some(Entry {
            key,
            on_close: Box::new(on_close),
        });
    }

    /// Close `key` if it is the active one; otherwise nothing happens
    pub fn deactivate(&self, key: &K) -> bool {
        if !self.is_active(key) {
            return false;
        }
        let entry = self.active.borrow_mut().take();
        match entry {
            Some(entry) => {
                (entry.on_close)();
                true
            }
            None => false,
        }
    }

    /// Close whatever is active
    pub fn clear(&self) {
        // Release the borrow before running the closer; it may touch the registry
        let entry = self.active.borrow_mut().take();
        if let Some(entry) = entry {
            (entry.on_close)();
        }
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active
            .borrow()
            .as_ref()
            .is_some_and(|entry| entry.key == *key)
    }

    pub fn active_key(&self) -> Option<K> {
        self.active.borrow().as_ref().map(|entry| entry.key.clone())
    }
}

impl<K: fmt::Debug> fmt::Debug for ExclusiveRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active.borrow();
        f.debug_struct("ExclusiveRegistry")
            .field("active", &active.as_ref().map(|entry| &entry.key))
            .finish()
    }
}
