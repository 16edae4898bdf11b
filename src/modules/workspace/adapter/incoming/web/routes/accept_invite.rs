use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::workspace::application::domain::entities::WorkspaceMember;
use crate::modules::workspace::application::use_cases::accept_invite::AcceptInviteError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AcceptInviteRequest {
    /// Token from the invite email link
    pub token: String,
}

/// Accept a workspace invite
///
/// Redeems the token from the invite email. The caller must be logged in
/// as the invited account; a token works exactly once.
#[utoipa::path(
    post,
    path = "/api-v1/workspaces/accept-invite",
    tag = "workspaces",
    request_body = AcceptInviteRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Membership granted", body = inline(SuccessResponse<WorkspaceMember>)),
        (status = 401, description = "Invalid or expired invite token", body = ErrorResponse),
        (status = 409, description = "Already a member", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/workspaces/accept-invite")]
pub async fn accept_invite_handler(
    user: AuthenticatedUser,
    req: web::Json<AcceptInviteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .workspace_use_cases
        .accept
        .execute(&req.token, user.user_id)
        .await
    {
        Ok(member) => {
            info!(workspace_id = %member.workspace_id, "Workspace invite accepted");
            ApiResponse::success(member)
        }

        Err(AcceptInviteError::TokenInvalidOrExpired) => {
            warn!("Invite redemption with invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired invite token")
        }

        Err(AcceptInviteError::AlreadyMember) => {
            ApiResponse::conflict("ALREADY_MEMBER", "User is already a member")
        }

        Err(e) => {
            error!(error = %e, "Invite acceptance failed");
            ApiResponse::internal_error()
        }
    }
}
