//! Handler functions for authentication-related API endpoints.
//!
//! All three handlers are placeholders with no business logic; they exist so
//! the routes respond while issuance and session management remain external.

pub async fn sign_up() -> &'static str {
    "POST /api/auth/sign-up response"
}

pub async fn sign_in() -> &'static str {
    "POST /api/auth/sign-in response"
}

pub async fn sign_out() -> &'static str {
    "POST /api/auth/sign-out response"
}
