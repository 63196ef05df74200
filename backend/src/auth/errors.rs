//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur while gating a request and
//! fixes how each maps onto an HTTP response. The client-facing messages are
//! deliberately generic; the variant payloads exist for logging only.

use thiserror::Error;

use crate::auth::models::Role;
use crate::errors::ApiError;

/// Errors raised by the authentication and role-authorization gates.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential was found in any of the accepted request locations.
    #[error("no credential found in request")]
    NoCredential,

    /// A credential was found but the verifier rejected it.
    #[error("token verification failed: {0}")]
    VerificationFailed(String),

    /// The role gate ran without an authenticated identity in the request
    /// context. This is an ordering violation, reported as unauthorized.
    #[error("no authenticated identity in request context")]
    NotAuthenticated,

    /// The identity's role claim is not in the route's allow-list.
    #[error("role {actual} not in required set")]
    InsufficientRole {
        /// The role the identity actually carries.
        actual: Role,
    },

    /// Unexpected internal failure while evaluating the role check.
    #[error("role check failed: {0}")]
    RoleCheck(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoCredential => ApiError::Unauthorized("No token provided".into()),
            AuthError::NotAuthenticated => {
                ApiError::Unauthorized("User not authenticated".into())
            }
            AuthError::VerificationFailed(_) => {
                ApiError::Forbidden("Invalid or expired token".into())
            }
            AuthError::InsufficientRole { .. } => {
                ApiError::Forbidden("Insufficient permissions".into())
            }
            AuthError::RoleCheck(_) => {
                ApiError::Internal("Error checking user permissions".into())
            }
        }
    }
}
