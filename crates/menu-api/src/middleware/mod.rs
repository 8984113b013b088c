//! Request middleware for protected routes

pub mod auth;
pub mod throttle;

pub use auth::require_auth;
pub use throttle::throttle;
