pub mod workspace_invites;
pub mod workspace_members;
pub mod workspaces;
