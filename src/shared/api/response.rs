use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope every endpoint returns. Success carries `data`, failure
/// carries `error` with a stable machine-readable `code` (DUPLICATE_EMAIL,
/// NOT_A_MEMBER, EMAIL_DISPATCH_FAILED, ...) and a human-readable
/// `message`. Clients branch on the code; the message may change wording
/// freely.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

#[derive(Serialize, Clone)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// One constructor per failure status this API emits. Handlers never build
/// an error body by hand, so every failure goes over the wire in the same
/// shape.
impl ApiResponse<()> {
    fn failure(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ErrorPayload {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    /// Caller sent a request the handler could parse but not accept.
    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::BAD_REQUEST, code, message)
    }

    /// Missing, malformed, or expired credentials.
    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::UNAUTHORIZED, code, message)
    }

    /// Authenticated, but not allowed to touch this resource.
    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::NOT_FOUND, code, message)
    }

    /// The request raced or repeated an earlier one (duplicate email,
    /// pending invite, already verified).
    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::CONFLICT, code, message)
    }

    /// A dependency this request needs (the mail relay) refused or timed
    /// out; the request itself was fine and can be retried.
    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }

    /// Deliberately detail-free: whatever went wrong is in the logs, not
    /// in the response.
    pub fn internal_error() -> HttpResponse {
        Self::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
