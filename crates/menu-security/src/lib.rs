//! # Menu Security
//! 
//! Bearer token validation used to gate protected reads.

pub mod jwt;

pub use jwt::{Claims, JwtService};
