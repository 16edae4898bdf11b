pub mod accept_invite;
pub mod create_workspace;
pub mod get_workspace;
pub mod invite_member;
pub mod list_workspaces;

pub use accept_invite::accept_invite_handler;
pub use create_workspace::create_workspace_handler;
pub use get_workspace::get_workspace_handler;
pub use invite_member::invite_member_handler;
pub use list_workspaces::list_workspaces_handler;
