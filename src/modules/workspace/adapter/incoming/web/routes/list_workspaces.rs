use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::workspace::application::domain::entities::Workspace;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// List the caller's workspaces
#[utoipa::path(
    get,
    path = "/api-v1/workspaces",
    tag = "workspaces",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workspaces the caller belongs to", body = inline(SuccessResponse<Vec<Workspace>>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api-v1/workspaces")]
pub async fn list_workspaces_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.workspace_use_cases.list.execute(user.user_id).await {
        Ok(workspaces) => ApiResponse::success(workspaces),
        Err(e) => {
            error!(error = %e, "Workspace listing failed");
            ApiResponse::internal_error()
        }
    }
}
