//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use menu_shared::constants::MANAGER_GROUP;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
    #[error("Not an access token")]
    WrongTokenType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Claims {
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn is_manager(&self) -> bool {
        self.in_group(MANAGER_GROUP)
    }
}

/// Validates access tokens issued by the identity provider.
///
/// Tokens are HS256 with a shared secret. Issuing is kept for tooling and
/// tests; the API itself never hands tokens out.
pub struct JwtService {
    secret: String,
    access_token_expiry: i64,
}

impl JwtService {
    pub fn new(secret: String, access_expiry: i64) -> Self {
        Self {
            secret,
            access_token_expiry: access_expiry,
        }
    }

    pub fn generate_access_token(&self, subject: &str, groups: &[&str]) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            token_type: "access".to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            _ => JwtError::ValidationError(e.to_string()),
        })?;

        if claims.token_type != "access" {
            return Err(JwtError::WrongTokenType);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_groups() {
        let service = JwtService::new("test-secret".to_string(), 300);
        let token = service.generate_access_token("mario", &["Manager"]).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "mario");
        assert!(claims.is_manager());
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let issuer = JwtService::new("other-secret".to_string(), 300);
        let token = issuer.generate_access_token("mario", &[]).unwrap();
        let service = JwtService::new("test-secret".to_string(), 300);
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = JwtService::new("test-secret".to_string(), -3600);
        let token = service.generate_access_token("mario", &[]).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::TokenExpired)
        ));
    }
}
