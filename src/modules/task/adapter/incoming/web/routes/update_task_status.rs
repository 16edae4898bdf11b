use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::{Task, TaskStatus};
use crate::modules::task::application::use_cases::update_task_status::UpdateTaskStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct UpdateTaskStatusRequest {
    #[schema(example = "done")]
    pub status: TaskStatus,
}

/// Move a task to another status
#[utoipa::path(
    put,
    path = "/api-v1/tasks/{id}/status",
    tag = "tasks",
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = UpdateTaskStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated task", body = inline(SuccessResponse<Task>)),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api-v1/tasks/{id}/status")]
pub async fn update_task_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTaskStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = path.into_inner();

    match data
        .task_use_cases
        .update_status
        .execute(task_id, req.status, user.user_id)
        .await
    {
        Ok(task) => {
            info!(task_id = %task.id, status = %task.status, "Task status updated");
            ApiResponse::success(task)
        }

        Err(UpdateTaskStatusError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }

        Err(UpdateTaskStatusError::NotAMember) => {
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Task status update failed");
            ApiResponse::internal_error()
        }
    }
}
