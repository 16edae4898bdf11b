//! Inert stand-ins for every use case so each route test only has to wire
//! the one it exercises. They all fail with a "not wired" error, which makes
//! a test that accidentally hits the wrong handler fail loudly.

use crate::modules::auth::application::domain::entities::{TokenPurpose, VerificationRecord};
use crate::modules::auth::application::ports::outgoing::{
    AdmissionControl, AdmissionDecision, AdmissionError, RequestContext, VerificationLedger,
    VerificationLedgerError,
};
use crate::modules::auth::application::use_cases::complete_password_reset::{
    CompletePasswordResetError, CompletePasswordResetInput, ICompletePasswordResetUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginUserError, LoginUserInput, LoginUserOutput,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::modules::auth::application::use_cases::request_password_reset::{
    IRequestPasswordResetUseCase, RequestPasswordResetError,
};
use crate::modules::auth::application::use_cases::resend_verification::{
    IResendVerificationUseCase, ResendVerificationError,
};
use crate::modules::auth::application::use_cases::verify_email::{
    IVerifyEmailUseCase, VerifyEmailError,
};
use crate::modules::email::application::ports::outgoing::{AuthEmailNotifier, NotificationError};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::use_cases::create_project::{
    CreateProjectError, CreateProjectInput, ICreateProjectUseCase,
};
use crate::modules::project::application::use_cases::get_project::{
    GetProjectError, IGetProjectUseCase,
};
use crate::modules::project::application::use_cases::list_projects::{
    IListProjectsUseCase, ListProjectsError,
};
use crate::modules::task::application::domain::entities::{Task, TaskStatus};
use crate::modules::task::application::use_cases::create_task::{
    CreateTaskError, CreateTaskInput, ICreateTaskUseCase,
};
use crate::modules::task::application::use_cases::list_tasks::{IListTasksUseCase, ListTasksError};
use crate::modules::task::application::use_cases::update_task_status::{
    IUpdateTaskStatusUseCase, UpdateTaskStatusError,
};
use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceMember,
};
use crate::modules::workspace::application::use_cases::accept_invite::{
    AcceptInviteError, IAcceptInviteUseCase,
};
use crate::modules::workspace::application::use_cases::create_workspace::{
    CreateWorkspaceError, CreateWorkspaceInput, ICreateWorkspaceUseCase,
};
use crate::modules::workspace::application::use_cases::get_workspace::{
    GetWorkspaceError, IGetWorkspaceUseCase, WorkspaceDetail,
};
use crate::modules::workspace::application::use_cases::invite_member::{
    IInviteMemberUseCase, InviteMemberError, InviteMemberInput,
};
use crate::modules::workspace::application::use_cases::list_workspaces::{
    IListWorkspacesUseCase, ListWorkspacesError,
};
use async_trait::async_trait;
use uuid::Uuid;

const NOT_WIRED: &str = "not wired in this test";

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _input: LoginUserInput) -> Result<LoginUserOutput, LoginUserError> {
        Err(LoginUserError::QueryError(NOT_WIRED.to_string()))
    }
}

pub struct StubVerifyEmailUseCase;

#[async_trait]
impl IVerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<(), VerifyEmailError> {
        Err(VerifyEmailError::QueryError(NOT_WIRED.to_string()))
    }
}

pub struct StubResendVerificationUseCase;

#[async_trait]
impl IResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _email: &str) -> Result<(), ResendVerificationError> {
        Err(ResendVerificationError::QueryError(NOT_WIRED.to_string()))
    }
}

pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(&self, _email: &str) -> Result<(), RequestPasswordResetError> {
        Err(RequestPasswordResetError::QueryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCompletePasswordResetUseCase;

#[async_trait]
impl ICompletePasswordResetUseCase for StubCompletePasswordResetUseCase {
    async fn execute(
        &self,
        _input: CompletePasswordResetInput,
    ) -> Result<(), CompletePasswordResetError> {
        Err(CompletePasswordResetError::QueryError(NOT_WIRED.to_string()))
    }
}

pub struct StubAdmission;

#[async_trait]
impl AdmissionControl for StubAdmission {
    async fn protect(
        &self,
        _ctx: &RequestContext,
        _email: &str,
    ) -> Result<AdmissionDecision, AdmissionError> {
        Ok(AdmissionDecision::Allow)
    }
}

pub struct StubVerificationLedger;

#[async_trait]
impl VerificationLedger for StubVerificationLedger {
    async fn find_by_user_and_purpose(
        &self,
        _user_id: Uuid,
        _purpose: TokenPurpose,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
        Ok(None)
    }

    async fn find_by_user_and_token(
        &self,
        _user_id: Uuid,
        _token: &str,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
        Ok(None)
    }

    async fn create(&self, _record: VerificationRecord) -> Result<(), VerificationLedgerError> {
        Ok(())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<(), VerificationLedgerError> {
        Ok(())
    }

    async fn delete_by_user(&self, _user_id: Uuid) -> Result<(), VerificationLedgerError> {
        Ok(())
    }
}

pub struct StubAuthNotifier;

#[async_trait]
impl AuthEmailNotifier for StubAuthNotifier {
    async fn send_verification_email(
        &self,
        _to: &str,
        _name: &str,
        _token: &str,
    ) -> Result<(), NotificationError> {
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        _to: &str,
        _name: &str,
        _token: &str,
    ) -> Result<(), NotificationError> {
        Ok(())
    }

    async fn send_workspace_invite_email(
        &self,
        _to: &str,
        _name: &str,
        _workspace_name: &str,
        _token: &str,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}

pub struct StubCreateWorkspaceUseCase;

#[async_trait]
impl ICreateWorkspaceUseCase for StubCreateWorkspaceUseCase {
    async fn execute(
        &self,
        _input: CreateWorkspaceInput,
    ) -> Result<Workspace, CreateWorkspaceError> {
        Err(CreateWorkspaceError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListWorkspacesUseCase;

#[async_trait]
impl IListWorkspacesUseCase for StubListWorkspacesUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Workspace>, ListWorkspacesError> {
        Err(ListWorkspacesError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetWorkspaceUseCase;

#[async_trait]
impl IGetWorkspaceUseCase for StubGetWorkspaceUseCase {
    async fn execute(
        &self,
        _workspace_id: Uuid,
        _requester_id: Uuid,
    ) -> Result<WorkspaceDetail, GetWorkspaceError> {
        Err(GetWorkspaceError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubInviteMemberUseCase;

#[async_trait]
impl IInviteMemberUseCase for StubInviteMemberUseCase {
    async fn execute(&self, _input: InviteMemberInput) -> Result<(), InviteMemberError> {
        Err(InviteMemberError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubAcceptInviteUseCase;

#[async_trait]
impl IAcceptInviteUseCase for StubAcceptInviteUseCase {
    async fn execute(
        &self,
        _token: &str,
        _accepting_user_id: Uuid,
    ) -> Result<WorkspaceMember, AcceptInviteError> {
        Err(AcceptInviteError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl ICreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _input: CreateProjectInput) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListProjectsUseCase;

#[async_trait]
impl IListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _workspace_id: Uuid,
        _requester_id: Uuid,
    ) -> Result<Vec<Project>, ListProjectsError> {
        Err(ListProjectsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetProjectUseCase;

#[async_trait]
impl IGetProjectUseCase for StubGetProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _requester_id: Uuid,
    ) -> Result<Project, GetProjectError> {
        Err(GetProjectError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateTaskUseCase;

#[async_trait]
impl ICreateTaskUseCase for StubCreateTaskUseCase {
    async fn execute(&self, _input: CreateTaskInput) -> Result<Task, CreateTaskError> {
        Err(CreateTaskError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListTasksUseCase;

#[async_trait]
impl IListTasksUseCase for StubListTasksUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _requester_id: Uuid,
    ) -> Result<Vec<Task>, ListTasksError> {
        Err(ListTasksError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUpdateTaskStatusUseCase;

#[async_trait]
impl IUpdateTaskStatusUseCase for StubUpdateTaskStatusUseCase {
    async fn execute(
        &self,
        _task_id: Uuid,
        _status: TaskStatus,
        _requester_id: Uuid,
    ) -> Result<Task, UpdateTaskStatusError> {
        Err(UpdateTaskStatusError::RepositoryError(NOT_WIRED.to_string()))
    }
}
