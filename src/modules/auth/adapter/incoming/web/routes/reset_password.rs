use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::complete_password_reset::{
    CompletePasswordResetError, CompletePasswordResetInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompleteResetRequest {
    /// Token from the reset email link
    pub token: String,

    /// New password (minimum 8 characters)
    #[schema(example = "NewSecurePass123")]
    pub new_password: String,

    /// Must match `new_password`
    #[schema(example = "NewSecurePass123")]
    pub confirm_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct CompleteResetResponse {
    #[schema(example = "Password updated successfully")]
    message: String,
}

/// Complete a password reset
///
/// Consumes the reset token and replaces the password. The token works
/// exactly once.
#[utoipa::path(
    post,
    path = "/api-v1/auth/reset-password",
    tag = "auth",
    request_body = CompleteResetRequest,
    responses(
        (status = 200, description = "Password updated", body = inline(SuccessResponse<CompleteResetResponse>)),
        (status = 400, description = "Passwords do not match or are too short", body = ErrorResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api-v1/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<CompleteResetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.new_password.len() < 8 {
        return ApiResponse::bad_request(
            "INVALID_PASSWORD",
            "Password must be at least 8 characters",
        );
    }

    let input = CompletePasswordResetInput {
        token: req.token.clone(),
        new_password: req.new_password.clone(),
        confirm_password: req.confirm_password.clone(),
    };

    match data.complete_password_reset_use_case.execute(input).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(CompleteResetResponse {
                message: "Password updated successfully".to_string(),
            })
        }

        Err(CompletePasswordResetError::TokenInvalidOrExpired) => {
            warn!("Password reset with invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(CompletePasswordResetError::PasswordMismatch) => {
            ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match")
        }

        Err(CompletePasswordResetError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
