pub mod workspace_repository;

pub use workspace_repository::{
    CreateWorkspaceData, WorkspaceRepository, WorkspaceRepositoryError,
};
