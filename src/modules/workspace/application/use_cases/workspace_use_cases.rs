use std::sync::Arc;

use super::accept_invite::IAcceptInviteUseCase;
use super::create_workspace::ICreateWorkspaceUseCase;
use super::get_workspace::IGetWorkspaceUseCase;
use super::invite_member::IInviteMemberUseCase;
use super::list_workspaces::IListWorkspacesUseCase;

/// Bundle handed to the web layer so the app state carries one field per
/// module instead of one per use case.
#[derive(Clone)]
pub struct WorkspaceUseCases {
    pub create: Arc<dyn ICreateWorkspaceUseCase>,
    pub list: Arc<dyn IListWorkspacesUseCase>,
    pub get: Arc<dyn IGetWorkspaceUseCase>,
    pub invite: Arc<dyn IInviteMemberUseCase>,
    pub accept: Arc<dyn IAcceptInviteUseCase>,
}
