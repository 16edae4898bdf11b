use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::task::application::domain::entities::{Task, TaskPriority, TaskStatus};
use crate::modules::task::application::use_cases::create_task::{
    CreateTaskError, CreateTaskInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

const MIN_TITLE_LEN: usize = 3;

#[derive(Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[schema(example = "Draft landing page")]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to "to-do" when omitted.
    pub status: Option<TaskStatus>,
    /// Defaults to "medium" when omitted.
    pub priority: Option<TaskPriority>,
    #[schema(example = "2026-09-15")]
    pub due_date: NaiveDate,
    /// At least one workspace member.
    pub assignees: Vec<Uuid>,
}

/// Create a task in a project
#[utoipa::path(
    post,
    path = "/api-v1/projects/{project_id}/tasks",
    tag = "tasks",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = CreateTaskRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Task created", body = inline(SuccessResponse<Task>)),
        (status = 400, description = "Invalid title or empty assignees", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller or an assignee is not a member", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/projects/{project_id}/tasks")]
pub async fn create_task_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateTaskRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let title = req.title.trim().to_string();
    if title.len() < MIN_TITLE_LEN {
        return ApiResponse::bad_request(
            "INVALID_TITLE",
            "Task title must be at least 3 characters",
        );
    }
    if req.assignees.is_empty() {
        return ApiResponse::bad_request(
            "INVALID_ASSIGNEES",
            "A task needs at least one assignee",
        );
    }

    let input = CreateTaskInput {
        project_id,
        title,
        description: req.description.clone(),
        status: req.status,
        priority: req.priority,
        due_date: req.due_date,
        created_by: user.user_id,
        assignees: req.assignees.clone(),
    };

    match data.task_use_cases.create.execute(input).await {
        Ok(task) => {
            info!(task_id = %task.id, project_id = %project_id, "Task created");
            ApiResponse::created(task)
        }

        Err(CreateTaskError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(CreateTaskError::NotAMember) => {
            warn!(project_id = %project_id, "Non-member task creation attempt");
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(CreateTaskError::AssigneeNotAMember) => ApiResponse::bad_request(
            "INVALID_ASSIGNEES",
            "Every assignee must be a workspace member",
        ),

        Err(e) => {
            error!(error = %e, "Task creation failed");
            ApiResponse::internal_error()
        }
    }
}
