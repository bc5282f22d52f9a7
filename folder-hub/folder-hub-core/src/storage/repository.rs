//! In-memory folder repository.
//!
//! Hierarchy lives entirely in each folder's materialized path, so lookups and
//! moves are string scans over the collection. The matching rules are
//! deliberately loose and must stay that way for compatibility with existing
//! data sets:
//!
//! * descendant lookup matches `name.` anywhere in a path, so a query for
//!   `delta` also hits a segment named `xdelta`;
//! * a move rewrites every path that merely starts with the source path, so
//!   moving `alpha` also drags a root named `alphabet` along.

use crate::error::{LookupError, MoveError};
use crate::folder::{join_path, Folder, OrgId, DELIMITER};
use crate::source::FolderSource;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Sole owner of the folder collection for all organizations.
#[derive(Clone, Debug, Default)]
pub struct FolderRepository {
    folders: Vec<Folder>,
}

impl FolderRepository {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    pub fn from_source(source: &dyn FolderSource) -> Result<Self> {
        let folders = source.load()?;
        info!(count = folders.len(), "loaded folders");
        Ok(Self::new(folders))
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Every folder owned by `org_id`, in collection order.
    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<&Folder> {
        filter_by_org(&self.folders, org_id).collect()
    }

    /// Every folder in `org_id` that has `name` as an ancestor segment.
    ///
    /// The query is lower-cased before matching; stored paths are compared
    /// as they are.
    pub fn child_folders(&self, org_id: OrgId, name: &str) -> Result<Vec<&Folder>, LookupError> {
        let name = name.to_lowercase();
        if self.folders.is_empty() {
            return Err(LookupError::EmptyRepository);
        }
        let in_org = self.folders_by_org(org_id);
        if in_org.is_empty() {
            return Err(LookupError::UnknownOrganization(org_id));
        }
        if !mentions(self.folders.iter(), &name) {
            return Err(LookupError::InvalidFolderName(name));
        }
        if !mentions(in_org.iter().copied(), &name) {
            return Err(LookupError::FolderNotInOrganization { name, org_id });
        }

        let needle = format!("{name}{DELIMITER}");
        let children: Vec<&Folder> = in_org
            .into_iter()
            .filter(|f| f.path.contains(&needle))
            .collect();
        debug!(%org_id, %name, count = children.len(), "child folder lookup");
        Ok(children)
    }

    /// Move the folder called `name`, with its whole subtree, under the
    /// folder called `destination`. Returns the full updated collection.
    ///
    /// Both names resolve to the first folder carrying that exact name. All
    /// checks run before anything is rewritten.
    pub fn move_folder(&mut self, name: &str, destination: &str) -> Result<&[Folder], MoveError> {
        let (old_path, new_path) = match self.plan_move(name, destination) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(kind = err.kind(), %name, %destination, "move rejected");
                return Err(err);
            }
        };

        let mut rewritten = 0usize;
        for folder in self.folders.iter_mut() {
            if folder.path.starts_with(&old_path) {
                folder.path = folder.path.replacen(&old_path, &new_path, 1);
                rewritten += 1;
            }
        }
        info!(%name, %destination, from = %old_path, to = %new_path, rewritten, "moved folder");
        Ok(&self.folders)
    }

    /// Validate a move and return the `(old, new)` path pair to rewrite.
    fn plan_move(&self, name: &str, destination: &str) -> Result<(String, String), MoveError> {
        let source = self
            .find_by_name(name)
            .ok_or_else(|| MoveError::SourceNotFound(name.to_string()))?;
        let target = self
            .find_by_name(destination)
            .ok_or_else(|| MoveError::DestinationNotFound(destination.to_string()))?;

        if source.name == target.name {
            return Err(MoveError::SelfMove(source.name.clone()));
        }
        let subtree_prefix = format!("{}{DELIMITER}", source.path);
        // equal paths with different names only occur in data that breaks the
        // last-segment rule, which `new` does not reject
        if target.path == source.path || target.path.starts_with(&subtree_prefix) {
            return Err(MoveError::CyclicMove {
                folder: source.name.clone(),
                destination: target.name.clone(),
            });
        }
        if source.org_id != target.org_id {
            return Err(MoveError::CrossOrganizationMove {
                folder: source.name.clone(),
                destination: target.name.clone(),
            });
        }

        Ok((source.path.clone(), join_path(&target.path, &source.name)))
    }

    fn find_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }
}

fn filter_by_org(folders: &[Folder], org_id: OrgId) -> impl Iterator<Item = &Folder> {
    folders.iter().filter(move |f| f.org_id == org_id)
}

/// Whether `name` appears anywhere in the path text of any folder.
fn mentions<'a>(mut folders: impl Iterator<Item = &'a Folder>, name: &str) -> bool {
    folders.any(|f| f.path.contains(name))
}
