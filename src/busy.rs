//! Busy Flags
//!
//! Holding a [`BusyGuard`] keeps a reactive flag raised; dropping it lowers the flag,
//! whichever way the surrounding operation finishes.

use leptos::prelude::*;

pub struct BusyGuard<S>
where
    S: Write<Value = bool>,
{
    flag: S,
}

impl<S> BusyGuard<S>
where
    S: Write<Value = bool>,
{
    pub fn hold(flag: S) -> Self {
        *flag.write() = true;
        Self { flag }
    }
}

impl<S> Drop for BusyGuard<S>
where
    S: Write<Value = bool>,
{
    fn drop(&mut self) {
        // The owning scope may already be gone
        if let Some(mut flag) = self.flag.try_write() {
            *flag = false;
        }
    }
}
