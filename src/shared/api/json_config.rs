use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use actix_web::{Error, HttpRequest};

/// Actix's stock `Json` extractor answers a bad body with a plain-text
/// 400, which breaks the envelope clients parse. This config rewrites
/// those failures into the standard error shape before they leave the
/// server.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(handle_json_error)
}

fn handle_json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Expected application/json".to_string(),
        other => other.to_string(),
    };
    let response = ApiResponse::bad_request("VALIDATION_ERROR", &message);
    actix_web::error::InternalError::from_response(err, response).into()
}
