//! Shared application state.
//!
//! Immutable per-process state handed to middleware and handlers: the loaded
//! configuration and the token verifier behind its trait seam.

use std::sync::Arc;

use crate::auth::service::{JwtVerifier, TokenVerifier};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            verifier: Arc::new(JwtVerifier::new(&config.jwt_secret)),
            config: Arc::new(config.clone()),
        }
    }
}
