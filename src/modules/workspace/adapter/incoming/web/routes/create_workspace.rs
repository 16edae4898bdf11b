use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::workspace::application::domain::entities::Workspace;
use crate::modules::workspace::application::use_cases::create_workspace::CreateWorkspaceInput;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

const MAX_NAME_LEN: usize = 100;

#[derive(Deserialize, ToSchema)]
pub struct CreateWorkspaceRequest {
    #[schema(example = "Marketing")]
    pub name: String,
    pub description: Option<String>,
    /// Hex color like "#FF5733". A default is applied when omitted.
    pub color: Option<String>,
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Create a workspace
///
/// The caller becomes the owner member of the new workspace.
#[utoipa::path(
    post,
    path = "/api-v1/workspaces",
    tag = "workspaces",
    request_body = CreateWorkspaceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Workspace created", body = inline(SuccessResponse<Workspace>)),
        (status = 400, description = "Invalid name or color", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/workspaces")]
pub async fn create_workspace_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateWorkspaceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = req.name.trim().to_string();
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return ApiResponse::bad_request(
            "INVALID_NAME",
            "Workspace name must be between 1 and 100 characters",
        );
    }
    if let Some(color) = &req.color {
        if !is_hex_color(color) {
            return ApiResponse::bad_request("INVALID_COLOR", "Color must look like #RRGGBB");
        }
    }

    let input = CreateWorkspaceInput {
        name,
        description: req.description.clone(),
        color: req.color.clone(),
        owner_id: user.user_id,
    };

    match data.workspace_use_cases.create.execute(input).await {
        Ok(workspace) => {
            info!(workspace_id = %workspace.id, "Workspace created");
            ApiResponse::created(workspace)
        }
        Err(e) => {
            error!(error = %e, "Workspace creation failed");
            ApiResponse::internal_error()
        }
    }
}
