use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::workspace::application::domain::entities::{Workspace, WorkspaceMember};
use crate::modules::workspace::application::use_cases::get_workspace::GetWorkspaceError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct WorkspaceDetailResponse {
    #[serde(flatten)]
    pub workspace: Workspace,
    pub members: Vec<WorkspaceMember>,
}

/// Fetch one workspace with its member roster
///
/// Only members may look. Non-members get a 403 without the roster.
#[utoipa::path(
    get,
    path = "/api-v1/workspaces/{id}",
    tag = "workspaces",
    params(("id" = Uuid, Path, description = "Workspace id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workspace detail", body = inline(SuccessResponse<WorkspaceDetailResponse>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member", body = ErrorResponse),
        (status = 404, description = "Workspace not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api-v1/workspaces/{id}")]
pub async fn get_workspace_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workspace_id = path.into_inner();

    match data
        .workspace_use_cases
        .get
        .execute(workspace_id, user.user_id)
        .await
    {
        Ok(detail) => ApiResponse::success(WorkspaceDetailResponse {
            workspace: detail.workspace,
            members: detail.members,
        }),

        Err(GetWorkspaceError::NotFound) => {
            ApiResponse::not_found("WORKSPACE_NOT_FOUND", "Workspace not found")
        }

        Err(GetWorkspaceError::NotAMember) => {
            warn!(workspace_id = %workspace_id, "Non-member workspace access attempt");
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Workspace lookup failed");
            ApiResponse::internal_error()
        }
    }
}
