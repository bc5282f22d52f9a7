use super::FolderRepository;
use crate::error::{LookupError, MoveError};
use crate::folder::{Folder, OrgId};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe handle to a [`FolderRepository`].
///
/// Queries hold the read lock for their whole scan and a move holds the write
/// lock across validation and rewrite, so readers never see a half-moved
/// subtree. Results are cloned out of the lock.
#[derive(Clone, Default)]
pub struct SharedRepository {
    inner: Arc<RwLock<FolderRepository>>,
}

impl SharedRepository {
    pub fn new(repo: FolderRepository) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repo)),
        }
    }

    pub fn snapshot(&self) -> Vec<Folder> {
        self.inner.read().folders().to_vec()
    }

    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.inner
            .read()
            .folders_by_org(org_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn child_folders(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, LookupError> {
        let repo = self.inner.read();
        let children = repo.child_folders(org_id, name)?;
        Ok(children.into_iter().cloned().collect())
    }

    pub fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>, MoveError> {
        let mut repo = self.inner.write();
        repo.move_folder(name, destination).map(<[Folder]>::to_vec)
    }

    /// Run `f` with shared access to the repository.
    pub fn with_read<T>(&self, f: impl FnOnce(&FolderRepository) -> T) -> T {
        f(&self.inner.read())
    }
}
