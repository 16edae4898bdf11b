use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::project::application::use_cases::create_project::{
    CreateProjectError, CreateProjectInput,
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
pub struct CreateProjectRequest {
    #[schema(example = "Website relaunch")]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to "planning" when omitted.
    pub status: Option<ProjectStatus>,
    #[schema(example = "2026-09-01")]
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
}

/// Create a project in a workspace
///
/// Any member of the workspace may create projects.
#[utoipa::path(
    post,
    path = "/api-v1/workspaces/{workspace_id}/projects",
    tag = "projects",
    params(("workspace_id" = Uuid, Path, description = "Workspace id")),
    request_body = CreateProjectRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid title", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller is not a member", body = ErrorResponse),
        (status = 404, description = "Workspace not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/workspaces/{workspace_id}/projects")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workspace_id = path.into_inner();

    let title = req.title.trim().to_string();
    if title.len() < MIN_TITLE_LEN {
        return ApiResponse::bad_request(
            "INVALID_TITLE",
            "Project title must be at least 3 characters",
        );
    }

    let input = CreateProjectInput {
        workspace_id,
        title,
        description: req.description.clone(),
        status: req.status,
        start_date: req.start_date,
        due_date: req.due_date,
        created_by: user.user_id,
    };

    match data.project_use_cases.create.execute(input).await {
        Ok(project) => {
            info!(project_id = %project.id, workspace_id = %workspace_id, "Project created");
            ApiResponse::created(project)
        }

        Err(CreateProjectError::WorkspaceNotFound) => {
            ApiResponse::not_found("WORKSPACE_NOT_FOUND", "Workspace not found")
        }

        Err(CreateProjectError::NotAMember) => {
            warn!(workspace_id = %workspace_id, "Non-member project creation attempt");
            ApiResponse::forbidden("NOT_A_MEMBER", "You are not a member of this workspace")
        }

        Err(e) => {
            error!(error = %e, "Project creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::TokenPurpose;
    use crate::modules::project::application::use_cases::create_project::ICreateProjectUseCase;
    use crate::tests::support::app_state_builder::{test_token_codec, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct CreateSucceeds;

    #[async_trait]
    impl ICreateProjectUseCase for CreateSucceeds {
        async fn execute(
            &self,
            input: CreateProjectInput,
        ) -> Result<Project, CreateProjectError> {
            Ok(Project {
                id: Uuid::new_v4(),
                workspace_id: input.workspace_id,
                title: input.title,
                description: input.description,
                status: input.status.unwrap_or(ProjectStatus::Planning),
                start_date: input.start_date,
                due_date: input.due_date,
                created_by: input.created_by,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    struct CreateFails(CreateProjectError);

    #[async_trait]
    impl ICreateProjectUseCase for CreateFails {
        async fn execute(
            &self,
            _input: CreateProjectInput,
        ) -> Result<Project, CreateProjectError> {
            Err(self.0.clone())
        }
    }

    async fn call(
        use_case: impl ICreateProjectUseCase + 'static,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let codec = test_token_codec();
        let token = codec.issue(Uuid::new_v4(), TokenPurpose::Login).unwrap();
        let app_state = TestAppStateBuilder::default()
            .with_create_project(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(codec))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api-v1/workspaces/{}/projects", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn creation_returns_the_project() {
        let (status, body) = call(
            CreateSucceeds,
            serde_json::json!({ "title": "Website relaunch", "start_date": "2026-09-01" }),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["title"], "Website relaunch");
        assert_eq!(body["data"]["status"], "planning");
    }

    #[actix_web::test]
    async fn short_title_is_rejected() {
        let (status, body) = call(
            CreateSucceeds,
            serde_json::json!({ "title": "ab", "start_date": "2026-09-01" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_TITLE");
    }

    #[actix_web::test]
    async fn non_member_is_forbidden() {
        let (status, body) = call(
            CreateFails(CreateProjectError::NotAMember),
            serde_json::json!({ "title": "Website relaunch", "start_date": "2026-09-01" }),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_A_MEMBER");
    }

    #[actix_web::test]
    async fn missing_workspace_is_not_found() {
        let (status, body) = call(
            CreateFails(CreateProjectError::WorkspaceNotFound),
            serde_json::json!({ "title": "Website relaunch", "start_date": "2026-09-01" }),
        )
        .await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "WORKSPACE_NOT_FOUND");
    }
}
