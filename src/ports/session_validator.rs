//! Session validation port for bearer token validation.
//!
//! Sign-in happens at the identity provider. This service only checks the
//! access tokens it issues and extracts the participant's identity.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Validate expiry, and issuer/audience when configured
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct TestSessionValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    #[async_trait]
    impl SessionValidator for TestSessionValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn session_validator_is_object_safe() {
        let mut tokens = HashMap::new();
        tokens.insert(
            "valid".to_string(),
            AuthenticatedUser::new(UserId::new("user-123").unwrap(), None),
        );
        let validator: Box<dyn SessionValidator> = Box::new(TestSessionValidator {
            tokens: RwLock::new(tokens),
        });

        assert_eq!(validator.validate("valid").await.unwrap().id.as_str(), "user-123");
        assert_eq!(
            validator.validate("other").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
