use crate::folder::OrgId;

/// Reasons a descendant lookup is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no folders exist")]
    EmptyRepository,
    #[error("no folders belong to organization {0}")]
    UnknownOrganization(OrgId),
    #[error("no folder named `{0}` exists")]
    InvalidFolderName(String),
    #[error("folder `{name}` does not exist in organization {org_id}")]
    FolderNotInOrganization { name: String, org_id: OrgId },
}

/// Reasons a subtree move is rejected. The collection is never modified when
/// one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("source folder `{0}` does not exist")]
    SourceNotFound(String),
    #[error("destination folder `{0}` does not exist")]
    DestinationNotFound(String),
    #[error("cannot move folder `{0}` to itself")]
    SelfMove(String),
    #[error("cannot move folder `{folder}` into its own descendant `{destination}`")]
    CyclicMove { folder: String, destination: String },
    #[error("cannot move folder `{folder}` to `{destination}` in a different organization")]
    CrossOrganizationMove { folder: String, destination: String },
}

impl MoveError {
    /// Short stable identifier of the failure, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::SourceNotFound(_) => "source_not_found",
            MoveError::DestinationNotFound(_) => "destination_not_found",
            MoveError::SelfMove(_) => "self_move",
            MoveError::CyclicMove { .. } => "cyclic_move",
            MoveError::CrossOrganizationMove { .. } => "cross_organization_move",
        }
    }
}
