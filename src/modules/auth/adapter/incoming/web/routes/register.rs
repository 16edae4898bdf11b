use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::orchestrator::registration::RegistrationError;
use crate::modules::auth::application::ports::outgoing::RequestContext;
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Success message
    #[schema(example = "Account created. Please check your email to verify your account.")]
    message: String,

    /// Created user details
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Email address
    #[schema(example = "jane@example.com")]
    email: String,

    /// Display name
    #[schema(example = "Jane Doe")]
    name: String,
}

/// Normalizes and checks the request body. Email comparison is
/// case-insensitive everywhere, so the address is lowercased here once.
fn validate(req: &RegisterRequest) -> Result<RegisterUserInput, HttpResponse> {
    let email = req.email.trim().to_lowercase();
    if !EmailAddress::is_valid(&email) {
        return Err(ApiResponse::bad_request(
            "INVALID_EMAIL",
            "Invalid email format",
        ));
    }

    let name = req.name.trim().to_string();
    // Counted in characters, not bytes, so multibyte names get the full 100.
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(ApiResponse::bad_request(
            "INVALID_NAME",
            "Name must be between 1 and 100 characters",
        ));
    }

    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiResponse::bad_request(
            "INVALID_PASSWORD",
            "Password must be at least 8 characters",
        ));
    }

    Ok(RegisterUserInput {
        email,
        name,
        password: req.password.clone(),
    })
}

fn request_context(req: &HttpRequest) -> RequestContext {
    RequestContext {
        ip: req
            .connection_info()
            .realip_remote_addr()
            .map(|s| s.to_string()),
        user_agent: req
            .headers()
            .get("User-Agent")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
    }
}

/// Register a new user
///
/// Creates an unverified account and sends a verification email. The user
/// cannot log in until the email address is verified.
#[utoipa::path(
    post,
    path = "/api-v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Account created. Please check your email to verify your account.",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "jane@example.com",
                        "name": "Jane Doe"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                }))),
                ("Invalid password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PASSWORD",
                        "message": "Password must be at least 8 characters"
                    }
                })))
            )
        ),
        (
            status = 403,
            description = "Rejected by admission control",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "REGISTRATION_DENIED",
                    "message": "Disposable email address"
                }
            })
        ),
        (
            status = 409,
            description = "Email already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DUPLICATE_EMAIL",
                    "message": "Email address already in use"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api-v1/auth/register")]
pub async fn register_handler(
    http_req: HttpRequest,
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, "Registration attempt");

    let input = match validate(&req) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let ctx = request_context(&http_req);
    match data.registration_orchestrator.register(input, &ctx).await {
        Ok(user) => {
            info!(user_id = %user.user_id, email = %user.email, "Account created");
            ApiResponse::created(RegisterResponse {
                message: "Account created. Please check your email to verify your account."
                    .to_string(),
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    email: user.email,
                    name: user.name,
                },
            })
        }

        Err(RegistrationError::AdmissionDenied(reason)) => {
            warn!(email = %req.email, %reason, "Registration denied");
            ApiResponse::forbidden("REGISTRATION_DENIED", &reason)
        }

        Err(RegistrationError::RegisterUser(RegisterUserError::DuplicateEmail)) => {
            warn!(email = %req.email, "Duplicate registration");
            ApiResponse::conflict("DUPLICATE_EMAIL", "Email address already in use")
        }

        Err(e) => {
            error!(email = %req.email, error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
