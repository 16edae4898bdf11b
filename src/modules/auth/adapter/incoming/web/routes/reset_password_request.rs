use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::request_password_reset::RequestPasswordResetError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// Email address of the account
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetPasswordRequestResponse {
    #[schema(example = "Password reset email sent")]
    message: String,
}

/// Request a password reset
///
/// Sends a short-lived reset link to a verified account. While a reset is
/// pending, further requests are refused.
#[utoipa::path(
    post,
    path = "/api-v1/auth/reset-password-request",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Reset email sent", body = inline(SuccessResponse<ResetPasswordRequestResponse>)),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Reset already requested", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Mail relay rejected the message", body = ErrorResponse),
    )
)]
#[post("/api-v1/auth/reset-password-request")]
pub async fn reset_password_request_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.email.trim().to_lowercase();

    match data.request_password_reset_use_case.execute(&email).await {
        Ok(()) => {
            info!(%email, "Password reset email sent");
            ApiResponse::success(ResetPasswordRequestResponse {
                message: "Password reset email sent".to_string(),
            })
        }

        Err(RequestPasswordResetError::UserNotFound) => {
            warn!(%email, "Reset requested for unknown account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(RequestPasswordResetError::EmailNotVerified) => ApiResponse::forbidden(
            "EMAIL_NOT_VERIFIED",
            "Please verify your email before resetting your password",
        ),

        Err(RequestPasswordResetError::AlreadyRequested) => ApiResponse::conflict(
            "ALREADY_REQUESTED",
            "A password reset was already requested recently",
        ),

        Err(RequestPasswordResetError::NotificationDispatchFailed(e)) => {
            error!(%email, error = %e, "Reset email dispatch failed");
            ApiResponse::service_unavailable(
                "EMAIL_DISPATCH_FAILED",
                "Could not send the reset email, please try again later",
            )
        }

        Err(e) => {
            error!(%email, error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}
