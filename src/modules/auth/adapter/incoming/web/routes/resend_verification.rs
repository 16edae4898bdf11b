use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::resend_verification::ResendVerificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResendVerificationRequest {
    /// Email address of the unverified account
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResendVerificationResponse {
    #[schema(example = "Verification email sent")]
    message: String,
}

/// Resend the verification email
///
/// Only available while the previous verification token has expired or was
/// never issued; a live token blocks another send.
#[utoipa::path(
    post,
    path = "/api-v1/auth/resend-verification",
    tag = "auth",
    request_body = ResendVerificationRequest,
    responses(
        (status = 200, description = "Verification email sent", body = inline(SuccessResponse<ResendVerificationResponse>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Already verified or already requested", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Mail relay rejected the message", body = ErrorResponse),
    )
)]
#[post("/api-v1/auth/resend-verification")]
pub async fn resend_verification_handler(
    req: web::Json<ResendVerificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.email.trim().to_lowercase();

    match data.resend_verification_use_case.execute(&email).await {
        Ok(()) => {
            info!(%email, "Verification email re-sent");
            ApiResponse::success(ResendVerificationResponse {
                message: "Verification email sent".to_string(),
            })
        }

        Err(ResendVerificationError::UserNotFound) => {
            warn!(%email, "Resend requested for unknown account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ResendVerificationError::AlreadyVerified) => {
            ApiResponse::conflict("ALREADY_VERIFIED", "Email address is already verified")
        }

        Err(ResendVerificationError::AlreadyRequested) => ApiResponse::conflict(
            "ALREADY_REQUESTED",
            "A verification email was already sent recently",
        ),

        Err(ResendVerificationError::NotificationDispatchFailed(e)) => {
            error!(%email, error = %e, "Verification email dispatch failed");
            ApiResponse::service_unavailable(
                "EMAIL_DISPATCH_FAILED",
                "Could not send the verification email, please try again later",
            )
        }

        Err(e) => {
            error!(%email, error = %e, "Resend verification failed");
            ApiResponse::internal_error()
        }
    }
}
