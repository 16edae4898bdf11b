use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::use_cases::get_project::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Fetch one project
#[utoipa::path(
    get,
    path = "/api-v1/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Project>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member of the owning workspace", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api-v1/projects/{id}")]
pub async fn get_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project_use_cases
        .get
        .execute(path.into_inner(), user.user_id)
        .await
    {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectError::NotAMember) => {
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Project lookup failed");
            ApiResponse::internal_error()
        }
    }
}
