pub mod error;
pub mod folder;
pub mod source;
pub mod storage;

pub use error::{LookupError, MoveError};
pub use folder::{Folder, OrgId, DEFAULT_ORG_ID, DELIMITER};
pub use storage::{FolderRepository, SharedRepository};
