use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::verify_email::VerifyEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyEmailRequest {
    /// Token from the verification email link
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = "Email verified successfully")]
    message: String,
}

/// Verify an email address
///
/// Consumes the token from the verification email. A token works exactly
/// once; replays and expired links get the same 401.
#[utoipa::path(
    post,
    path = "/api-v1/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Already verified", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/auth/verify-email")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.verify_email_use_case.execute(&req.token).await {
        Ok(()) => {
            info!("Email verified");
            ApiResponse::success(VerifyEmailResponse {
                message: "Email verified successfully".to_string(),
            })
        }

        Err(VerifyEmailError::TokenInvalidOrExpired) => {
            warn!("Email verification with invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(VerifyEmailError::UserNotFound) => {
            warn!("Email verification for missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(VerifyEmailError::AlreadyVerified) => {
            ApiResponse::conflict("ALREADY_VERIFIED", "Email address is already verified")
        }

        Err(e) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}
