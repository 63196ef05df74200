//! Data structures for authentication-related entities.
//!
//! This module defines the decoded identity attached to authenticated
//! requests and the role claim used for coarse-grained access control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role claim carried by a decoded identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Decoded identity produced by token verification.
///
/// Attached to the request extensions by the authentication gate and
/// discarded at end of request. A token whose role claim is outside [`Role`]
/// fails deserialization and is treated as a verification failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier.
    pub id: i64,
    /// Role claim.
    pub role: Role,
    /// Optional email claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued at (Unix timestamp).
    pub iat: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_claim_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"user\"").unwrap(),
            Role::User
        );
    }

    #[test]
    fn unknown_role_claim_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn claims_parse_with_and_without_email() {
        let with_email: Claims = serde_json::from_value(serde_json::json!({
            "id": 7,
            "role": "admin",
            "email": "ops@example.com",
            "exp": 4102444800u64,
            "iat": 1700000000u64,
        }))
        .unwrap();
        assert_eq!(with_email.email.as_deref(), Some("ops@example.com"));

        let without_email: Claims = serde_json::from_value(serde_json::json!({
            "id": 7,
            "role": "user",
            "exp": 4102444800u64,
            "iat": 1700000000u64,
        }))
        .unwrap();
        assert!(without_email.email.is_none());
    }
}
