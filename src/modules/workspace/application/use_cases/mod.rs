pub mod accept_invite;
pub mod create_workspace;
pub mod get_workspace;
pub mod invite_member;
pub mod list_workspaces;
pub mod workspace_use_cases;

#[cfg(test)]
pub mod test_support;
