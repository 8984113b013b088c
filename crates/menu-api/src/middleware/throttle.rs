use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use menu_security::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Applies the per-subject quota. Must run after `require_auth`.
pub async fn throttle(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let subject = request
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.sub.clone())
        .ok_or_else(|| ApiError::InternalError("throttle ran before authentication".to_string()))?;

    if state.limiter.check_key(&subject).is_err() {
        return Err(ApiError::TooManyRequests(format!(
            "Request was throttled for {subject}"
        )));
    }

    Ok(next.run(request).await)
}
