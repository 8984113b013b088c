//! Token-gated endpoints

use axum::{Extension, Json};
use menu_security::Claims;

use crate::dto::MessageDto;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /api/secret
pub async fn secret(Extension(claims): Extension<Claims>) -> Json<ApiResponse<MessageDto>> {
    tracing::debug!("Secret requested by {}", claims.sub);
    Json(ApiResponse::success(MessageDto::new("This is a secret message")))
}

/// GET /api/manager
pub async fn manager(
    Extension(claims): Extension<Claims>,
) -> Result<Json<ApiResponse<MessageDto>>, ApiError> {
    if !claims.is_manager() {
        return Err(ApiError::Forbidden("You are not a manager".to_string()));
    }
    Ok(Json(ApiResponse::success(MessageDto::new(
        "Only the manager can see this message",
    ))))
}
