//! Token verification service.
//!
//! The gates depend on the [`TokenVerifier`] trait rather than a concrete
//! implementation so they can be exercised in tests with a stub verifier.
//! [`JwtVerifier`] is the production implementation: HS256 JWTs checked for
//! signature and expiry. Token issuance lives outside this backend.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::auth::errors::AuthError;
use crate::auth::models::Claims;

/// Verifies an opaque credential token into a decoded identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token`, returning the decoded claims or a failure for
    /// invalid, expired, or malformed tokens.
    async fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// JWT verifier backed by a shared HS256 secret.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| AuthError::VerificationFailed(err.to_string()))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;
    use crate::auth::models::Role;

    const SECRET: &str = "test-secret";

    fn claims_expiring_at(exp: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            id: 42,
            role: Role::Admin,
            email: Some("admin@example.com".into()),
            exp: exp.max(0) as u64,
            iat: now.max(0) as u64,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_yields_claims() {
        let token = sign(&claims_expiring_at(Utc::now().timestamp() + 3600), SECRET);
        let verifier = JwtVerifier::new(SECRET);

        let claims = verifier.verify(&token).await.unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, Role::Admin);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        // Well past the default leeway.
        let token = sign(&claims_expiring_at(Utc::now().timestamp() - 3600), SECRET);
        let verifier = JwtVerifier::new(SECRET);

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::VerificationFailed(_)));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let token = sign(
            &claims_expiring_at(Utc::now().timestamp() + 3600),
            "other-secret",
        );
        let verifier = JwtVerifier::new(SECRET);

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::VerificationFailed(_)));
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let err = verifier.verify("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AuthError::VerificationFailed(_)));
    }
}
