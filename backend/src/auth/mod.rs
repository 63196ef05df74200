//! Authentication module for request gating and access control.
//!
//! This module provides the public interface for authentication-related
//! functionality: credential resolution, token verification, the
//! authentication and role-authorization middleware, and the placeholder
//! sign-up/sign-in/sign-out routes.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use service::*;
