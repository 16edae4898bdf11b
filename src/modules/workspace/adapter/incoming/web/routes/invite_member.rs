use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::workspace::application::domain::entities::WorkspaceRole;
use crate::modules::workspace::application::use_cases::invite_member::{
    InviteMemberError, InviteMemberInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct InviteMemberRequest {
    #[schema(example = "dana@example.com")]
    pub email: String,
    /// Role granted on acceptance. Ownership is not grantable by invite.
    pub role: WorkspaceRole,
}

#[derive(Serialize, ToSchema)]
pub struct InviteMemberResponse {
    #[schema(example = "Invite sent")]
    message: String,
}

/// Invite a registered user into a workspace
///
/// Only owners and admins may invite. The invitee receives an email with a
/// single-use invite link.
#[utoipa::path(
    post,
    path = "/api-v1/workspaces/{id}/invite",
    tag = "workspaces",
    params(("id" = Uuid, Path, description = "Workspace id")),
    request_body = InviteMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Invite sent", body = inline(SuccessResponse<InviteMemberResponse>)),
        (status = 400, description = "Invalid role", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 403, description = "Caller may not manage members", body = ErrorResponse),
        (status = 404, description = "Workspace or invitee not found", body = ErrorResponse),
        (status = 409, description = "Already a member or already invited", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Mail relay rejected the message", body = ErrorResponse),
    )
)]
#[post("/api-v1/workspaces/{id}/invite")]
pub async fn invite_member_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<InviteMemberRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let workspace_id = path.into_inner();

    if req.role == WorkspaceRole::Owner {
        return ApiResponse::bad_request("INVALID_ROLE", "Cannot invite a user as owner");
    }

    let input = InviteMemberInput {
        workspace_id,
        inviter_id: user.user_id,
        invitee_email: req.email.trim().to_lowercase(),
        role: req.role,
    };

    match data.workspace_use_cases.invite.execute(input).await {
        Ok(()) => {
            info!(workspace_id = %workspace_id, "Workspace invite sent");
            ApiResponse::success(InviteMemberResponse {
                message: "Invite sent".to_string(),
            })
        }

        Err(InviteMemberError::WorkspaceNotFound) => {
            ApiResponse::not_found("WORKSPACE_NOT_FOUND", "Workspace not found")
        }

        Err(InviteMemberError::Forbidden) => {
            warn!(workspace_id = %workspace_id, "Invite attempt without manage rights");
            ApiResponse::forbidden("FORBIDDEN", "Only owners and admins may invite members")
        }

        Err(InviteMemberError::InviteeNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "No account registered for that email")
        }

        Err(InviteMemberError::AlreadyMember) => {
            ApiResponse::conflict("ALREADY_MEMBER", "User is already a member")
        }

        Err(InviteMemberError::AlreadyInvited) => {
            ApiResponse::conflict("ALREADY_INVITED", "An invite for this user is still pending")
        }

        Err(InviteMemberError::NotificationDispatchFailed(e)) => {
            error!(workspace_id = %workspace_id, error = %e, "Invite email dispatch failed");
            ApiResponse::service_unavailable(
                "EMAIL_DISPATCH_FAILED",
                "Could not send the invite email, please try again later",
            )
        }

        Err(e) => {
            error!(error = %e, "Workspace invite failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::TokenPurpose;
    use crate::modules::workspace::application::use_cases::invite_member::IInviteMemberUseCase;
    use crate::tests::support::app_state_builder::{test_token_codec, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct InviteSucceeds;

    #[async_trait]
    impl IInviteMemberUseCase for InviteSucceeds {
        async fn execute(&self, _input: InviteMemberInput) -> Result<(), InviteMemberError> {
            Ok(())
        }
    }

    struct InviteFails(InviteMemberError);

    #[async_trait]
    impl IInviteMemberUseCase for InviteFails {
        async fn execute(&self, _input: InviteMemberInput) -> Result<(), InviteMemberError> {
            Err(self.0.clone())
        }
    }

    async fn call(
        use_case: impl IInviteMemberUseCase + 'static,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let codec = test_token_codec();
        let token = codec.issue(Uuid::new_v4(), TokenPurpose::Login).unwrap();
        let app_state = TestAppStateBuilder::default()
            .with_invite_member(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(codec))
                .service(invite_member_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api-v1/workspaces/{}/invite", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn invite_success_returns_ok() {
        let (status, body) = call(
            InviteSucceeds,
            serde_json::json!({ "email": "dana@example.com", "role": "member" }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Invite sent");
    }

    #[actix_web::test]
    async fn owner_role_is_not_grantable() {
        let (status, body) = call(
            InviteSucceeds,
            serde_json::json!({ "email": "dana@example.com", "role": "owner" }),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_ROLE");
    }

    #[actix_web::test]
    async fn non_manager_is_forbidden() {
        let (status, body) = call(
            InviteFails(InviteMemberError::Forbidden),
            serde_json::json!({ "email": "dana@example.com", "role": "member" }),
        )
        .await;
        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn unregistered_invitee_is_not_found() {
        let (status, body) = call(
            InviteFails(InviteMemberError::InviteeNotFound),
            serde_json::json!({ "email": "nobody@example.com", "role": "member" }),
        )
        .await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn pending_invite_is_conflict() {
        let (status, body) = call(
            InviteFails(InviteMemberError::AlreadyInvited),
            serde_json::json!({ "email": "dana@example.com", "role": "member" }),
        )
        .await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "ALREADY_INVITED");
    }

    #[actix_web::test]
    async fn dispatch_failure_gets_its_own_code() {
        let (status, body) = call(
            InviteFails(InviteMemberError::NotificationDispatchFailed("down".to_string())),
            serde_json::json!({ "email": "dana@example.com", "role": "member" }),
        )
        .await;
        assert_eq!(status, 503);
        assert_eq!(body["error"]["code"], "EMAIL_DISPATCH_FAILED");
    }
}
