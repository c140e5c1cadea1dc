//! Folder Context Menu Component
//!
//! The single right-click menu, positioned at the cursor.

use leptos::prelude::*;

use crate::context::use_explorer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuAction {
    NewSubfolder,
    Rename,
    Delete,
}

#[component]
pub fn FolderContextMenu() -> impl IntoView {
    let ctx = use_explorer();
    let menu = ctx.context_menu;

    let style = move || {
        let pos = menu.position.get();
        format!("position: fixed; left: {}px; top: {}px;", pos.x, pos.y)
    };

    let run = move |action: MenuAction| {
        if action == MenuAction::NewSubfolder && ctx.create.creating.get_untracked() {
            return;
        }
        let target = menu.target.get_untracked();
        menu.close();
        let Some(folder) = target else { return };
        match action {
            MenuAction::NewSubfolder => ctx.create_and_rename(Some(folder)),
            MenuAction::Rename => ctx.rename.start(&folder),
            MenuAction::Delete => ctx.delete_folder(folder),
        }
    };

    view! {
        <Show when=move || menu.visible.get()>
            <ul
                class="context-menu"
                style=style
                // Keep the window listener from closing the menu before an item runs
                on:click=move |ev| ev.stop_propagation()
            >
                <li
                    class=move || if ctx.create.creating.get() { "menu-item disabled" } else { "menu-item" }
                    on:click=move |_| run(MenuAction::NewSubfolder)
                >
                    "New folder"
                </li>
                <li class="menu-item" on:click=move |_| run(MenuAction::Rename)>"Rename"</li>
                <li class="menu-item danger" on:click=move |_| run(MenuAction::Delete)>"Delete"</li>
            </ul>
        </Show>
    }
}
