//! Search Panel Component
//!
//! Query box and flat result list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_explorer;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_explorer();
    let search = ctx.search;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.run_search();
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search folders..."
                prop:value=move || search.query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    search.query.set(input.value());
                }
            />
            <button type="submit" disabled=move || search.searching.get()>"Search"</button>
            <Show when=move || !search.results.with(|r| r.is_empty())>
                <button type="button" class="cancel-btn" on:click=move |_| search.clear()>
                    "Clear"
                </button>
            </Show>
        </form>

        <ul class="search-results">
            <For
                each=move || search.results.get()
                key=|folder| folder.id
                children=move |folder| {
                    view! {
                        <li class="search-result">
                            <span class="folder-icon">"📁"</span>
                            <span class="folder-name">{folder.name}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
