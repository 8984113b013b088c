// ============================================================================
// Menu API - Menu Item Handlers
// File: crates/menu-api/src/handlers/menu_items.rs
// ============================================================================
//! Menu item listing and CRUD handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use menu_core::listing::MenuQueryParams;
use menu_core::validation::RawMenuItem;
use menu_shared::EntityId;
use tracing::info;

use crate::dto::{MenuItemBasicDto, MenuItemDto};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/menu-items
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MenuQueryParams>,
) -> Result<Json<ApiResponse<Vec<MenuItemDto>>>, ApiError> {
    let page = state.menu_service.list(&params).await?;
    let meta = page.meta();
    let items: Vec<MenuItemDto> = page.items.iter().map(MenuItemDto::from).collect();
    Ok(Json(ApiResponse::paginated(items, meta)))
}

/// POST /api/menu-items
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RawMenuItem>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItemDto>>), ApiError> {
    let Json(raw) = payload?;
    let created = state.menu_service.create(raw).await?;
    info!("POST /api/menu-items -> {}", created.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MenuItemDto::from(&created))),
    ))
}

/// GET /api/menu-items/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<ApiResponse<MenuItemDto>>, ApiError> {
    let item = state.menu_service.get(id).await?;
    Ok(Json(ApiResponse::success(MenuItemDto::from(&item))))
}

/// PUT /api/menu-items/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<RawMenuItem>, JsonRejection>,
) -> Result<Json<ApiResponse<MenuItemDto>>, ApiError> {
    let Json(raw) = payload?;
    let updated = state.menu_service.update(id, raw, false).await?;
    Ok(Json(ApiResponse::success(MenuItemDto::from(&updated))))
}

/// PATCH /api/menu-items/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<RawMenuItem>, JsonRejection>,
) -> Result<Json<ApiResponse<MenuItemDto>>, ApiError> {
    let Json(raw) = payload?;
    let updated = state.menu_service.update(id, raw, true).await?;
    Ok(Json(ApiResponse::success(MenuItemDto::from(&updated))))
}

/// DELETE /api/menu-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.menu_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/menu-items-basic
pub async fn list_basic(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuItemBasicDto>>>, ApiError> {
    let items = state.menu_service.list_all().await?;
    Ok(Json(ApiResponse::success(
        items.iter().map(MenuItemBasicDto::from).collect(),
    )))
}

/// GET /api/menu-items-basic/{id}
pub async fn get_basic(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<ApiResponse<MenuItemBasicDto>>, ApiError> {
    let item = state.menu_service.get(id).await?;
    Ok(Json(ApiResponse::success(MenuItemBasicDto::from(&item))))
}
