use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::use_cases::list_projects::ListProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// List the projects of a workspace
#[utoipa::path(
    get,
    path = "/api-v1/workspaces/{workspace_id}/projects",
    tag = "projects",
    params(("workspace_id" = Uuid, Path, description = "Workspace id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projects of the workspace", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member", body = ErrorResponse),
        (status = 404, description = "Workspace not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api-v1/workspaces/{workspace_id}/projects")]
pub async fn list_projects_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workspace_id = path.into_inner();

    match data
        .project_use_cases
        .list
        .execute(workspace_id, user.user_id)
        .await
    {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListProjectsError::WorkspaceNotFound) => {
            ApiResponse::not_found("WORKSPACE_NOT_FOUND", "Workspace not found")
        }

        Err(ListProjectsError::NotAMember) => {
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Project listing failed");
            ApiResponse::internal_error()
        }
    }
}
