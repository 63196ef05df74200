//! Module for user profile and management API endpoints.
//!
//! These endpoints are gated by the authentication middleware (and, for
//! writes, the role-authorization middleware) and exercise the user payload
//! validation schemas. No persistence sits behind them.

pub mod handlers;
pub mod routes;
pub mod validation;
