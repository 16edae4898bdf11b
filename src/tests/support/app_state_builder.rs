use crate::modules::auth::application::orchestrator::registration::RegistrationOrchestrator;
use crate::modules::auth::application::services::token::{TokenCodec, TokenConfig};
use crate::modules::auth::application::use_cases::{
    complete_password_reset::ICompletePasswordResetUseCase, login_user::ILoginUserUseCase,
    request_password_reset::IRequestPasswordResetUseCase,
    resend_verification::IResendVerificationUseCase, verify_email::IVerifyEmailUseCase,
};
use crate::modules::project::application::use_cases::create_project::ICreateProjectUseCase;
use crate::modules::project::application::use_cases::get_project::IGetProjectUseCase;
use crate::modules::project::application::use_cases::list_projects::IListProjectsUseCase;
use crate::modules::project::application::use_cases::project_use_cases::ProjectUseCases;
use crate::modules::task::application::use_cases::create_task::ICreateTaskUseCase;
use crate::modules::task::application::use_cases::list_tasks::IListTasksUseCase;
use crate::modules::task::application::use_cases::task_use_cases::TaskUseCases;
use crate::modules::task::application::use_cases::update_task_status::IUpdateTaskStatusUseCase;
use crate::modules::workspace::application::use_cases::accept_invite::IAcceptInviteUseCase;
use crate::modules::workspace::application::use_cases::create_workspace::ICreateWorkspaceUseCase;
use crate::modules::workspace::application::use_cases::get_workspace::IGetWorkspaceUseCase;
use crate::modules::workspace::application::use_cases::invite_member::IInviteMemberUseCase;
use crate::modules::workspace::application::use_cases::list_workspaces::IListWorkspacesUseCase;
use crate::modules::workspace::application::use_cases::workspace_use_cases::WorkspaceUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Codec with a fixed secret so tests can mint tokens that the extractor
/// accepts.
pub fn test_token_codec() -> TokenCodec {
    TokenCodec::new(TokenConfig {
        secret: "test-only-secret".to_string(),
        previous_secret: None,
        verification_ttl_secs: 3600,
        reset_ttl_secs: 900,
        session_ttl_secs: 604_800,
        invite_ttl_secs: 604_800,
    })
}

fn stub_registration_orchestrator() -> Arc<RegistrationOrchestrator> {
    Arc::new(RegistrationOrchestrator::new(
        Arc::new(StubAdmission),
        Arc::new(StubRegisterUserUseCase),
        Arc::new(StubVerificationLedger),
        test_token_codec(),
        Arc::new(StubAuthNotifier),
    ))
}

pub struct TestAppStateBuilder {
    registration_orchestrator: Arc<RegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase>,
    verify_email: Arc<dyn IVerifyEmailUseCase>,
    resend_verification: Arc<dyn IResendVerificationUseCase>,
    request_password_reset: Arc<dyn IRequestPasswordResetUseCase>,
    complete_password_reset: Arc<dyn ICompletePasswordResetUseCase>,
    workspace: WorkspaceUseCases,
    project: ProjectUseCases,
    task: TaskUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            registration_orchestrator: stub_registration_orchestrator(),
            login_user: Arc::new(StubLoginUserUseCase),
            verify_email: Arc::new(StubVerifyEmailUseCase),
            resend_verification: Arc::new(StubResendVerificationUseCase),
            request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
            complete_password_reset: Arc::new(StubCompletePasswordResetUseCase),
            workspace: WorkspaceUseCases {
                create: Arc::new(StubCreateWorkspaceUseCase),
                list: Arc::new(StubListWorkspacesUseCase),
                get: Arc::new(StubGetWorkspaceUseCase),
                invite: Arc::new(StubInviteMemberUseCase),
                accept: Arc::new(StubAcceptInviteUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                list: Arc::new(StubListProjectsUseCase),
                get: Arc::new(StubGetProjectUseCase),
            },
            task: TaskUseCases {
                create: Arc::new(StubCreateTaskUseCase),
                list: Arc::new(StubListTasksUseCase),
                update_status: Arc::new(StubUpdateTaskStatusUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_registration_orchestrator(
        mut self,
        orchestrator: Arc<RegistrationOrchestrator>,
    ) -> Self {
        self.registration_orchestrator = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_verify_email(mut self, uc: impl IVerifyEmailUseCase + 'static) -> Self {
        self.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + 'static,
    ) -> Self {
        self.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + 'static,
    ) -> Self {
        self.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_complete_password_reset(
        mut self,
        uc: impl ICompletePasswordResetUseCase + 'static,
    ) -> Self {
        self.complete_password_reset = Arc::new(uc);
        self
    }

    pub fn with_create_workspace(mut self, uc: impl ICreateWorkspaceUseCase + 'static) -> Self {
        self.workspace.create = Arc::new(uc);
        self
    }

    pub fn with_list_workspaces(mut self, uc: impl IListWorkspacesUseCase + 'static) -> Self {
        self.workspace.list = Arc::new(uc);
        self
    }

    pub fn with_get_workspace(mut self, uc: impl IGetWorkspaceUseCase + 'static) -> Self {
        self.workspace.get = Arc::new(uc);
        self
    }

    pub fn with_invite_member(mut self, uc: impl IInviteMemberUseCase + 'static) -> Self {
        self.workspace.invite = Arc::new(uc);
        self
    }

    pub fn with_accept_invite(mut self, uc: impl IAcceptInviteUseCase + 'static) -> Self {
        self.workspace.accept = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl ICreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_list_projects(mut self, uc: impl IListProjectsUseCase + 'static) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl IGetProjectUseCase + 'static) -> Self {
        self.project.get = Arc::new(uc);
        self
    }

    pub fn with_create_task(mut self, uc: impl ICreateTaskUseCase + 'static) -> Self {
        self.task.create = Arc::new(uc);
        self
    }

    pub fn with_list_tasks(mut self, uc: impl IListTasksUseCase + 'static) -> Self {
        self.task.list = Arc::new(uc);
        self
    }

    pub fn with_update_task_status(mut self, uc: impl IUpdateTaskStatusUseCase + 'static) -> Self {
        self.task.update_status = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            registration_orchestrator: self.registration_orchestrator,
            login_user_use_case: self.login_user,
            verify_email_use_case: self.verify_email,
            resend_verification_use_case: self.resend_verification,
            request_password_reset_use_case: self.request_password_reset,
            complete_password_reset_use_case: self.complete_password_reset,
            workspace_use_cases: self.workspace,
            project_use_cases: self.project,
            task_use_cases: self.task,
        })
    }
}
