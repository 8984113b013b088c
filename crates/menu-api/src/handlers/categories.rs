//! Category handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use menu_shared::EntityId;

use crate::dto::{CategoryDto, CreateCategoryRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryDto>>>, ApiError> {
    let categories = state.category_service.list().await?;
    Ok(Json(ApiResponse::success(
        categories.iter().map(CategoryDto::from).collect(),
    )))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryDto>>), ApiError> {
    let Json(request) = payload?;
    let created = state
        .category_service
        .create(request.slug, request.title)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CategoryDto::from(&created))),
    ))
}

/// GET /api/category/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<ApiResponse<CategoryDto>>, ApiError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::success(CategoryDto::from(&category))))
}
