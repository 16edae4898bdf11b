use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::SanitizedUser;
use crate::modules::auth::application::use_cases::login_user::{LoginUserError, LoginUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session token, sent as `Authorization: Bearer <token>` afterwards
    token: String,

    /// The authenticated user
    user: SanitizedUser,
}

/// Log in
///
/// Exchanges credentials for a session token. Whether the email is unknown
/// or the password wrong, the response is the same 401.
#[utoipa::path(
    post,
    path = "/api-v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Logged in",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 403,
            description = "Email not verified",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_NOT_VERIFIED",
                    "message": "Please verify your email before logging in"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api-v1/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = LoginUserInput {
        email: req.email.trim().to_lowercase(),
        password: req.password.clone(),
    };

    match data.login_user_use_case.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User logged in");
            ApiResponse::success(LoginResponse {
                token: output.token,
                user: output.user,
            })
        }

        Err(LoginUserError::InvalidCredentials) => {
            warn!(email = %req.email, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginUserError::EmailNotVerified) => {
            warn!(email = %req.email, "Login attempt on unverified account");
            ApiResponse::forbidden(
                "EMAIL_NOT_VERIFIED",
                "Please verify your email before logging in",
            )
        }

        Err(e) => {
            error!(email = %req.email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
