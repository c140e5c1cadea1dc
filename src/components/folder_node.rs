//! Folder Node Component
//!
//! One folder row plus its children, rendered recursively.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_explorer;
use crate::models::FolderId;
use crate::store::store_find_folder;

/// Recursive folder tree node
///
/// Reads its own name and child ids from the shared index by `id`, so a rename
/// or a splice only re-renders the rows it touches.
#[component]
pub fn FolderNode(id: FolderId, depth: usize) -> impl IntoView {
    let ctx = use_explorer();
    let store = ctx.store;
    let indent = depth * 16;

    let name = Memo::new(move |_| {
        ctx.index
            .with(|index| index.get(&id).map(|entry| entry.name.clone()))
            .unwrap_or_default()
    });
    let child_ids = Memo::new(move |_| {
        ctx.index
            .with(|index| index.get(&id).map(|entry| entry.child_ids.clone()))
            .unwrap_or_default()
    });

    let (expanded, set_expanded) = signal(true);
    let (menu_open, set_menu_open) = signal(false);

    // Right-click opens the shared menu; whichever node had it loses it
    let on_context_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(folder) = store_find_folder(&store, id) {
            ctx.context_menu
                .open(folder, ev.client_x(), ev.client_y(), move || {
                    let _ = set_menu_open.try_set(false);
                });
            set_menu_open.set(true);
        }
    };

    let on_double_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(folder) = store_find_folder(&store, id) {
            ctx.rename.start(&folder);
        }
    };

    view! {
        <div class="folder-node">
            <div
                class=move || if menu_open.get() { "folder-row menu-open" } else { "folder-row" }
                style=format!("padding-left: {}px;", indent + 8)
                on:contextmenu=on_context_menu
                on:dblclick=on_double_click
            >
                // Expand/collapse toggle
                {move || if child_ids.with(|ids| !ids.is_empty()) {
                    view! {
                        <button
                            class="folder-expand-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_expanded.update(|v| *v = !*v);
                            }
                        >
                            {move || if expanded.get() { "▼" } else { "▶" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <span class="folder-expand-placeholder">"·"</span> }.into_any()
                }}

                <span class="folder-icon">"📁"</span>

                {move || if ctx.rename.is_editing(id) {
                    view! { <RenameInput id=id /> }.into_any()
                } else {
                    view! { <span class="folder-name">{move || name.get()}</span> }.into_any()
                }}
            </div>

            // Children (recursive)
            <Show when=move || expanded.get()>
                <div class="folder-children">
                    <For
                        each=move || child_ids.get()
                        key=|child| *child
                        children=move |child| {
                            view! { <FolderNode id=child depth=depth + 1 /> }.into_any()
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Inline rename editor
///
/// Enter blurs, blur submits, Escape cancels.
#[component]
fn RenameInput(id: FolderId) -> impl IntoView {
    let ctx = use_explorer();
    let rename = ctx.rename;
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let submit = move || {
        // Blur also fires when the input is torn down after cancel or submit
        if rename.editing_id.get_untracked() != Some(id) {
            return;
        }
        match store_find_folder(&ctx.store, id) {
            Some(folder) => ctx.submit_rename(folder),
            None => rename.cancel(),
        }
    };

    view! {
        <input
            class="rename-input"
            type="text"
            node_ref=input_ref
            prop:value=move || rename.edit_name.get()
            disabled=move || rename.renaming.get()
            on:input=move |ev| rename.edit_name.set(event_target_value(&ev))
            on:click=move |ev| ev.stop_propagation()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        if let Some(input) = input_ref.get() {
                            let _ = input.blur();
                        }
                    }
                    "Escape" => rename.cancel(),
                    _ => {}
                }
            }
            on:blur=move |_| submit()
        />
    }
}
