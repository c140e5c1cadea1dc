//! UI Components
//!
//! Leptos components for the folder explorer.

mod folder_explorer;
mod folder_node;
mod folder_context_menu;
mod search_panel;

pub use folder_explorer::FolderExplorer;
pub use folder_node::FolderNode;
pub use folder_context_menu::FolderContextMenu;
pub use search_panel::SearchPanel;
