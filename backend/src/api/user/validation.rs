//! Request-payload validation schemas for the user resource.
//!
//! User ids are coerced from their path segment and must be positive
//! integers. Update payloads accept an optional trimmed name, an optional
//! lower-cased trimmed email, and an optional role; unknown fields are
//! rejected at deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::models::Role;
use crate::errors::ApiError;

/// Coerce a raw path segment into a positive integer user id.
pub fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("Invalid user ID".into()))
}

/// Partial update for a user record. All fields optional; unknown fields
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserPayload {
    #[validate(length(min = 2, max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UpdateUserPayload {
    /// Trim the name and trim/lower-case the email before validation.
    pub fn normalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            *name = name.trim().to_string();
        }
        if let Some(email) = self.email.as_mut() {
            *email = email.trim().to_lowercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_coerces_positive_integers() {
        assert_eq!(parse_user_id("7").unwrap(), 7);
        assert_eq!(parse_user_id(" 12 ").unwrap(), 12);
    }

    #[test]
    fn user_id_rejects_non_positive_and_non_numeric() {
        for raw in ["0", "-3", "abc", "1.5", ""] {
            let err = parse_user_id(raw).unwrap_err();
            match err {
                ApiError::Validation(message) => assert_eq!(message, "Invalid user ID"),
                other => panic!("unexpected error for {raw:?}: {other}"),
            }
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<UpdateUserPayload>(serde_json::json!({
            "name": "Alice",
            "is_admin": true,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let mut payload = serde_json::from_value::<UpdateUserPayload>(serde_json::json!({
            "email": "  Ops@Example.COM ",
        }))
        .unwrap();
        payload.normalize();
        assert_eq!(payload.email.as_deref(), Some("ops@example.com"));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn short_name_fails_validation() {
        let mut payload = serde_json::from_value::<UpdateUserPayload>(serde_json::json!({
            "name": " a ",
        }))
        .unwrap();
        payload.normalize();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn role_must_be_a_known_enum_member() {
        assert!(serde_json::from_value::<UpdateUserPayload>(serde_json::json!({
            "role": "admin",
        }))
        .is_ok());
        assert!(serde_json::from_value::<UpdateUserPayload>(serde_json::json!({
            "role": "root",
        }))
        .is_err());
    }

    #[test]
    fn empty_payload_is_valid() {
        let payload =
            serde_json::from_value::<UpdateUserPayload>(serde_json::json!({})).unwrap();
        assert!(payload.validate().is_ok());
    }
}
