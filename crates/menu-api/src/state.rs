use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use menu_core::repositories::{CategoryRepository, MenuItemRepository};
use menu_core::services::{CategoryService, MenuService};
use menu_security::JwtService;
use menu_shared::config::{AppConfig, JwtSettings, ListingSettings, ThrottleSettings, ValidationSettings};

/// Per-subject request quota for authenticated routes
pub type SubjectLimiter = DefaultKeyedRateLimiter<String>;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub category_service: Arc<CategoryService>,
    pub jwt: Arc<JwtService>,
    pub limiter: Arc<SubjectLimiter>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn CategoryRepository>,
        listing: ListingSettings,
        validation: ValidationSettings,
        jwt: &JwtSettings,
        throttle: ThrottleSettings,
    ) -> Self {
        let per_minute = NonZeroU32::new(throttle.requests_per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            menu_service: Arc::new(MenuService::new(
                items,
                categories.clone(),
                listing,
                validation,
            )),
            category_service: Arc::new(CategoryService::new(categories)),
            jwt: Arc::new(JwtService::new(jwt.secret.clone(), jwt.access_token_expiry)),
            limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute))),
        }
    }

    pub fn from_config(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn CategoryRepository>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            items,
            categories,
            config.listing,
            config.validation,
            &config.jwt,
            config.throttle,
        )
    }
}
