use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::login::{LoginRequest, LoginResponse};
use crate::modules::auth::adapter::incoming::web::routes::register::{
    RegisterRequest, RegisterResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::resend_verification::{
    ResendVerificationRequest, ResendVerificationResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::reset_password::{
    CompleteResetRequest, CompleteResetResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::reset_password_request::{
    ResetPasswordRequest, ResetPasswordRequestResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::verify_email::{
    VerifyEmailRequest, VerifyEmailResponse,
};
use crate::modules::auth::application::domain::entities::SanitizedUser;
use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::project::adapter::incoming::web::routes::create_project::CreateProjectRequest;
use crate::modules::task::adapter::incoming::web::routes::create_task::CreateTaskRequest;
use crate::modules::task::adapter::incoming::web::routes::update_task_status::UpdateTaskStatusRequest;
use crate::modules::task::application::domain::entities::{Task, TaskPriority, TaskStatus};
use crate::modules::workspace::adapter::incoming::web::routes::accept_invite::AcceptInviteRequest;
use crate::modules::workspace::adapter::incoming::web::routes::create_workspace::CreateWorkspaceRequest;
use crate::modules::workspace::adapter::incoming::web::routes::get_workspace::WorkspaceDetailResponse;
use crate::modules::workspace::adapter::incoming::web::routes::invite_member::{
    InviteMemberRequest, InviteMemberResponse,
};
use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceMember, WorkspaceRole,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskHUB API",
        version = "1.0.0",
        description = "Task and project management backend"
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register::register_handler,
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_email::verify_email_handler,
        crate::modules::auth::adapter::incoming::web::routes::resend_verification::resend_verification_handler,
        crate::modules::auth::adapter::incoming::web::routes::reset_password_request::reset_password_request_handler,
        crate::modules::auth::adapter::incoming::web::routes::reset_password::reset_password_handler,

        // Workspaces
        crate::modules::workspace::adapter::incoming::web::routes::create_workspace::create_workspace_handler,
        crate::modules::workspace::adapter::incoming::web::routes::list_workspaces::list_workspaces_handler,
        crate::modules::workspace::adapter::incoming::web::routes::get_workspace::get_workspace_handler,
        crate::modules::workspace::adapter::incoming::web::routes::invite_member::invite_member_handler,
        crate::modules::workspace::adapter::incoming::web::routes::accept_invite::accept_invite_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project::get_project_handler,

        // Tasks
        crate::modules::task::adapter::incoming::web::routes::create_task::create_task_handler,
        crate::modules::task::adapter::incoming::web::routes::list_tasks::list_tasks_handler,
        crate::modules::task::adapter::incoming::web::routes::update_task_status::update_task_status_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            VerifyEmailRequest,
            VerifyEmailResponse,
            ResendVerificationRequest,
            ResendVerificationResponse,
            ResetPasswordRequest,
            ResetPasswordRequestResponse,
            CompleteResetRequest,
            CompleteResetResponse,
            SanitizedUser,

            // Workspace DTOs
            CreateWorkspaceRequest,
            WorkspaceDetailResponse,
            InviteMemberRequest,
            InviteMemberResponse,
            AcceptInviteRequest,
            Workspace,
            WorkspaceMember,
            WorkspaceRole,

            // Project DTOs
            CreateProjectRequest,
            Project,
            ProjectStatus,

            // Task DTOs
            CreateTaskRequest,
            UpdateTaskStatusRequest,
            Task,
            TaskStatus,
            TaskPriority,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, and account verification"),
        (name = "workspaces", description = "Workspace and membership management"),
        (name = "projects", description = "Projects within a workspace"),
        (name = "tasks", description = "Tasks within a project"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from the login endpoint"))
                        .build(),
                ),
            )
        }
    }
}
