//! Shared-secret JWT validator.
//!
//! The identity provider signs access tokens with HS256 using a secret it
//! shares with this service. Validation checks:
//!
//! 1. Signature against the shared secret
//! 2. Expiry (always)
//! 3. Issuer and audience, when configured
//!
//! The `sub` claim becomes the participant's `UserId`.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            issuer: None,
            audience: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
}

pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token issued for another service: {}", e);
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let claims = data.claims;
        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Token has a blank subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "test-secret-at-least-32-bytes-long!!";

    fn config() -> JwtConfig {
        JwtConfig::new(SecretString::new(SECRET.to_string()))
    }

    fn token(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn in_one_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn valid_token_yields_user() {
        let validator = JwtSessionValidator::new(&config());
        let jwt = token(
            json!({"sub": "user-1", "exp": in_one_hour(), "email": "a@b.com"}),
            SECRET,
        );
        let user = validator.validate(&jwt).await.unwrap();
        assert_eq!(user.id.as_str(), "user-1");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let validator = JwtSessionValidator::new(&config());
        let jwt = token(json!({"sub": "user-1", "exp": in_one_hour()}), "another-secret");
        assert_eq!(validator.validate(&jwt).await.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn expired_token_reports_expiry() {
        let validator = JwtSessionValidator::new(&config());
        let past = chrono::Utc::now().timestamp() - 3600;
        let jwt = token(json!({"sub": "user-1", "exp": past}), SECRET);
        assert_eq!(validator.validate(&jwt).await.unwrap_err(), AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn audience_is_checked_when_configured() {
        let validator = JwtSessionValidator::new(&config().with_audience("authenticated"));
        let wrong = token(
            json!({"sub": "user-1", "exp": in_one_hour(), "aud": "other"}),
            SECRET,
        );
        assert!(validator.validate(&wrong).await.is_err());

        let right = token(
            json!({"sub": "user-1", "exp": in_one_hour(), "aud": "authenticated"}),
            SECRET,
        );
        assert!(validator.validate(&right).await.is_ok());
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let validator = JwtSessionValidator::new(&config());
        assert_eq!(
            validator.validate("not-a-jwt").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
