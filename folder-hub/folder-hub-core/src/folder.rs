//! Folder records and the materialized-path encoding they carry.
//!
//! A folder's position in the hierarchy is stored as a single string of
//! ancestor names joined by [`DELIMITER`], ending with the folder's own name.
//! There are no parent pointers; every hierarchical query works on that string.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};
use uuid::Uuid;

/// Separator between path segments.
pub const DELIMITER: char = '.';

/// Organization used by the sample data and as the CLI default.
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// Opaque tenant identifier owning a folder.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrgId(pub Uuid);

impl OrgId {
    pub fn new_v4() -> Self {
        OrgId(Uuid::new_v4())
    }

    /// The organization the bundled sample data is generated for.
    pub const fn default_org() -> Self {
        OrgId(uuid::uuid!("c1556e17-b7c0-45a3-a6ae-9546248fb17a"))
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrgId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(OrgId)
    }
}

impl From<Uuid> for OrgId {
    fn from(id: Uuid) -> Self {
        OrgId(id)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    #[serde(rename = "paths")]
    pub path: String,
    #[serde(rename = "orgId")]
    pub org_id: OrgId,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }

    /// Root folder whose path is just its own name.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            org_id,
        }
    }

    /// Folder nested directly under `parent`, in the parent's organization.
    pub fn child_of(parent: &Folder, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: join_path(&parent.path, &name),
            name,
            org_id: parent.org_id,
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(DELIMITER)
    }

    /// Number of ancestors; a root folder has depth 0.
    pub fn depth(&self) -> usize {
        self.path.matches(DELIMITER).count()
    }

    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once(DELIMITER).map(|(parent, _)| parent)
    }

    /// True when `other` sits somewhere below this folder, with an exact
    /// segment boundary.
    pub fn is_ancestor_of(&self, other: &Folder) -> bool {
        other
            .path
            .strip_prefix(self.path.as_str())
            .is_some_and(|rest| rest.starts_with(DELIMITER))
    }
}

pub fn join_path(parent: &str, name: &str) -> String {
    format!("{parent}{DELIMITER}{name}")
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("folder `{name}` has path `{path}` whose last segment is not its name")]
    NameMismatch { name: String, path: String },
    #[error("folder `{descendant}` (org {descendant_org}) is nested under `{ancestor}` (org {ancestor_org})")]
    MixedOrgSubtree {
        ancestor: String,
        ancestor_org: OrgId,
        descendant: String,
        descendant_org: OrgId,
    },
}

/// Check that every path ends in its folder's name and that no subtree spans
/// two organizations.
///
/// Ancestry is decided on path text across the whole collection, the same way
/// a move rewrites paths: a root `alpha` in one organization is an ancestor of
/// `alpha.bravo` in any organization.
pub fn check_invariants(folders: &[Folder]) -> Result<(), InvariantViolation> {
    let mut by_path: HashMap<&str, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        let last = folder.path.rsplit(DELIMITER).next().unwrap_or_default();
        if last != folder.name {
            return Err(InvariantViolation::NameMismatch {
                name: folder.name.clone(),
                path: folder.path.clone(),
            });
        }
        by_path.entry(folder.path.as_str()).or_default().push(folder);
    }
    for descendant in folders {
        let mut current = descendant.parent_path();
        while let Some(path) = current {
            let foreign = by_path
                .get(path)
                .and_then(|found| found.iter().find(|a| a.org_id != descendant.org_id));
            if let Some(ancestor) = foreign {
                return Err(InvariantViolation::MixedOrgSubtree {
                    ancestor: ancestor.path.clone(),
                    ancestor_org: ancestor.org_id,
                    descendant: descendant.path.clone(),
                    descendant_org: descendant.org_id,
                });
            }
            current = path.rsplit_once(DELIMITER).map(|(parent, _)| parent);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let org = OrgId::new_v4();
        let alpha = Folder::root("alpha", org);
        let bravo = Folder::child_of(&alpha, "bravo");
        let charlie = Folder::child_of(&bravo, "charlie");

        assert_eq!(charlie.path, "alpha.bravo.charlie");
        assert_eq!(charlie.org_id, org);
        assert_eq!(charlie.depth(), 2);
        assert_eq!(alpha.depth(), 0);
        assert_eq!(charlie.parent_path(), Some("alpha.bravo"));
        assert_eq!(alpha.parent_path(), None);
        assert_eq!(
            charlie.segments().collect::<Vec<_>>(),
            vec!["alpha", "bravo", "charlie"]
        );
        assert!(alpha.is_ancestor_of(&charlie));
        assert!(!charlie.is_ancestor_of(&alpha));
        assert!(!alpha.is_ancestor_of(&alpha));
    }

    #[test]
    fn ancestor_check_is_segment_exact() {
        let org = OrgId::new_v4();
        let alpha = Folder::root("alpha", org);
        let alphabet = Folder::root("alphabet", org);
        assert!(!alpha.is_ancestor_of(&alphabet));
    }

    #[test]
    fn serde_uses_interchange_field_names() {
        let folder = Folder::new("bravo", "alpha.bravo", OrgId::default_org());
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["name"], "bravo");
        assert_eq!(json["paths"], "alpha.bravo");
        assert_eq!(json["orgId"], DEFAULT_ORG_ID);

        let back: Folder = serde_json::from_value(json).unwrap();
        assert_eq!(back, folder);
    }

    #[test]
    fn org_id_parses_and_displays() {
        let org: OrgId = DEFAULT_ORG_ID.parse().unwrap();
        assert_eq!(org, OrgId::default_org());
        assert_eq!(org.to_string(), DEFAULT_ORG_ID);
        assert!("not-a-uuid".parse::<OrgId>().is_err());
    }

    #[test]
    fn invariants_accept_consistent_tree() {
        let org = OrgId::new_v4();
        let other = OrgId::new_v4();
        let alpha = Folder::root("alpha", org);
        let bravo = Folder::child_of(&alpha, "bravo");
        let beta = Folder::root("beta", other);
        let nested_alpha = Folder::child_of(&beta, "alpha");
        let nested_bravo = Folder::child_of(&nested_alpha, "bravo");
        assert_eq!(
            check_invariants(&[alpha, bravo, beta, nested_alpha, nested_bravo]),
            Ok(())
        );
    }

    #[test]
    fn invariants_reject_root_path_shared_across_orgs() {
        let org = OrgId::new_v4();
        let other = OrgId::new_v4();
        let alpha = Folder::root("alpha", org);
        let bravo = Folder::child_of(&alpha, "bravo");
        let foreign_alpha = Folder::root("alpha", other);
        assert_eq!(
            check_invariants(&[alpha, bravo, foreign_alpha]),
            Err(InvariantViolation::MixedOrgSubtree {
                ancestor: "alpha".to_string(),
                ancestor_org: other,
                descendant: "alpha.bravo".to_string(),
                descendant_org: org,
            })
        );
    }

    #[test]
    fn invariants_accept_leaf_roots_shared_across_orgs() {
        let alpha = Folder::root("alpha", OrgId::new_v4());
        let foreign_alpha = Folder::root("alpha", OrgId::new_v4());
        assert_eq!(check_invariants(&[alpha, foreign_alpha]), Ok(()));
    }

    #[test]
    fn invariants_check_every_ancestor_level() {
        let org = OrgId::new_v4();
        let alpha = Folder::root("alpha", org);
        let deep = Folder::new("charlie", "alpha.bravo.charlie", OrgId::new_v4());
        assert!(matches!(
            check_invariants(&[alpha, deep]),
            Err(InvariantViolation::MixedOrgSubtree { ref ancestor, .. }) if ancestor == "alpha"
        ));
    }

    #[test]
    fn invariants_reject_name_mismatch() {
        let org = OrgId::new_v4();
        let bad = Folder::new("bravo", "alpha.charlie", org);
        assert!(matches!(
            check_invariants(&[bad]),
            Err(InvariantViolation::NameMismatch { .. })
        ));
    }

    #[test]
    fn invariants_reject_mixed_org_subtree() {
        let alpha = Folder::root("alpha", OrgId::new_v4());
        let stray = Folder::new("bravo", "alpha.bravo", OrgId::new_v4());
        assert!(matches!(
            check_invariants(&[alpha, stray]),
            Err(InvariantViolation::MixedOrgSubtree { .. })
        ));
    }
}
