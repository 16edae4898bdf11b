use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::Task;
use crate::modules::task::application::use_cases::list_tasks::ListTasksError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// List the tasks of a project
#[utoipa::path(
    get,
    path = "/api-v1/projects/{project_id}/tasks",
    tag = "tasks",
    params(("project_id" = Uuid, Path, description = "Project id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tasks of the project", body = inline(SuccessResponse<Vec<Task>>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api-v1/projects/{project_id}/tasks")]
pub async fn list_tasks_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .task_use_cases
        .list
        .execute(path.into_inner(), user.user_id)
        .await
    {
        Ok(tasks) => ApiResponse::success(tasks),

        Err(ListTasksError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(ListTasksError::NotAMember) => {
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Task listing failed");
            ApiResponse::internal_error()
        }
    }
}
