//! Folder storage: the single-owner repository and its thread-safe handle.

mod repository;
mod shared;

pub use repository::FolderRepository;
pub use shared::SharedRepository;
