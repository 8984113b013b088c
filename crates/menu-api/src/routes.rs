//! Router assembly

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{categories, health, menu_items, protected};
use crate::middleware::{require_auth, throttle};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Authenticated, throttled per token subject
    let protected_routes = Router::new()
        .route("/api/secret", get(protected::secret))
        .route("/api/manager", get(protected::manager))
        .route_layer(middleware::from_fn_with_state(state.clone(), throttle))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/menu-items",
            get(menu_items::list).post(menu_items::create),
        )
        .route(
            "/api/menu-items/{id}",
            get(menu_items::get)
                .put(menu_items::replace)
                .patch(menu_items::patch)
                .delete(menu_items::delete),
        )
        .route("/api/menu-items-basic", get(menu_items::list_basic))
        .route("/api/menu-items-basic/{id}", get(menu_items::get_basic))
        .route("/api/category/{id}", get(categories::get))
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use menu_infrastructure::InMemoryMenuStore;
    use menu_shared::config::{JwtSettings, ListingSettings, ThrottleSettings, ValidationSettings};
    use menu_shared::ValidationStrategy;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_with(strategy: ValidationStrategy, requests_per_minute: u32) -> AppState {
        let store = Arc::new(InMemoryMenuStore::new());
        let lunch = store.seed_category("lunch", "Lunch");
        let dinner = store.seed_category("dinner", "Dinner");
        store.seed_item("A", Decimal::new(5, 0), 10, lunch.id);
        store.seed_item("B", Decimal::new(12, 0), 4, dinner.id);
        store.seed_item("C", Decimal::new(8, 0), 7, lunch.id);

        AppState::new(
            store.clone(),
            store,
            ListingSettings::default(),
            ValidationSettings {
                strategy,
                min_price: Decimal::new(200, 2),
            },
            &JwtSettings {
                secret: "test-secret".to_string(),
                access_token_expiry: 300,
            },
            ThrottleSettings { requests_per_minute },
        )
    }

    fn test_state() -> AppState {
        state_with(ValidationStrategy::CollectAll, 10)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn authed_req(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    fn titles(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_listing_defaults_to_price_order_and_two_per_page() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/api/menu-items")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["A", "C"]);
        assert_eq!(body["pagination"]["total_items"], 3);
        assert_eq!(body["pagination"]["total_pages"], 2);
    }

    #[tokio::test]
    async fn test_listing_filters_orders_and_paginates() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            get_req("/api/menu-items?category=Lunch&ordering=price&perpage=1&page=2"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["C"]);
        assert_eq!(body["data"][0]["price"], "8.00");
    }

    #[tokio::test]
    async fn test_listing_descending_with_price_ceiling() {
        let app = build_router(test_state());
        let (_, body) = send(&app, get_req("/api/menu-items?to_price=8&ordering=-price")).await;
        assert_eq!(titles(&body), vec!["C", "A"]);
    }

    #[tokio::test]
    async fn test_listing_page_out_of_range_is_empty() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/api/menu-items?page=10")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_rejects_bad_parameters() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/api/menu-items?perpage=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_PARAMETER");

        let (status, _) = send(&app, get_req("/api/menu-items?ordering=colour")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get_req("/api/menu-items?to_price=cheap")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            json_req(
                Method::POST,
                "/api/menu-items",
                json!({"title": "Soup", "price": "4.50", "stock": 4, "category_id": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["price_after_tax"], "4.95");
        assert_eq!(body["data"]["category"]["title"], "Lunch");

        let (_, body) = send(&app, get_req("/api/menu-items?search=Soup")).await;
        assert_eq!(titles(&body), vec!["Soup"]);
        assert_eq!(body["data"][0]["price"], "4.50");
        assert_eq!(body["data"][0]["price_after_tax"], "4.95");
        assert_eq!(body["data"][0]["stock"], 4);
    }

    #[tokio::test]
    async fn test_create_reports_all_field_errors() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            json_req(
                Method::POST,
                "/api/menu-items",
                json!({"title": "Soup", "price": "1.00", "stock": -1, "category_id": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["price", "stock"]);
    }

    #[tokio::test]
    async fn test_create_fail_fast_reports_first_error() {
        let app = build_router(state_with(ValidationStrategy::FailFast, 10));
        let (status, body) = send(
            &app,
            json_req(
                Method::POST,
                "/api/menu-items",
                json!({"title": "Soup", "price": "1.00", "stock": -1, "category_id": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"].as_array().unwrap().len(), 1);
        assert_eq!(body["error"]["fields"][0]["field"], "price");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = build_router(test_state());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/menu-items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_patch_keeps_stored_fields() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            json_req(Method::PATCH, "/api/menu-items/3", json!({"stock": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "C");
        assert_eq!(body["data"]["price"], "8.00");
        assert_eq!(body["data"]["stock"], 0);
    }

    #[tokio::test]
    async fn test_put_requires_every_field() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            json_req(Method::PUT, "/api/menu-items/3", json!({"stock": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "title");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let app = build_router(test_state());
        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/menu-items/1")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, get_req("/api/menu-items/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_basic_listing_in_id_order() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/api/menu-items-basic")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["A", "B", "C"]);
        assert_eq!(body["data"][1]["inventory"], 4);
    }

    #[tokio::test]
    async fn test_categories() {
        let app = build_router(test_state());
        let (status, body) = send(&app, get_req("/api/category/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slug"], "dinner");

        let (status, _) = send(&app, get_req("/api/category/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            json_req(
                Method::POST,
                "/api/categories",
                json!({"slug": "desserts", "title": "Desserts"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 3);

        let (status, body) = send(
            &app,
            json_req(
                Method::POST,
                "/api/categories",
                json!({"slug": "lunch", "title": "Second Lunch"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["code"], "unique");
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = build_router(test_state());
        let (status, _) = send(&app, get_req("/api/secret")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, authed_req("/api/secret", "not-a-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_manager_route_checks_group() {
        let state = test_state();
        let customer = state.jwt.generate_access_token("adrian", &[]).unwrap();
        let manager = state.jwt.generate_access_token("mario", &["Manager"]).unwrap();
        let app = build_router(state);

        let (status, body) = send(&app, authed_req("/api/secret", &customer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "This is a secret message");

        let (status, _) = send(&app, authed_req("/api/manager", &customer)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(&app, authed_req("/api/manager", &manager)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "Only the manager can see this message");
    }

    #[tokio::test]
    async fn test_throttle_per_subject() {
        let state = state_with(ValidationStrategy::CollectAll, 2);
        let first = state.jwt.generate_access_token("adrian", &[]).unwrap();
        let second = state.jwt.generate_access_token("mario", &[]).unwrap();
        let app = build_router(state);

        for _ in 0..2 {
            let (status, _) = send(&app, authed_req("/api/secret", &first)).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = send(&app, authed_req("/api/secret", &first)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"]["code"], "THROTTLED");

        let (status, _) = send(&app, authed_req("/api/secret", &second)).await;
        assert_eq!(status, StatusCode::OK);
    }
}
