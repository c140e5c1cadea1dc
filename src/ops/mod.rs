//! Folder Operations
//!
//! Each operation wraps one backend call and, on success, one splice of the
//! shared tree. Failures are logged and leave local state untouched.

mod create;
mod delete;
mod rename;
mod search;

pub use create::CreateFolder;
pub use delete::DeleteFolder;
pub use rename::RenameFolder;
pub use search::SearchFolders;
