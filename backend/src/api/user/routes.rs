//! Defines the HTTP routes for the user resource.
//!
//! All routes require authentication; updates additionally require the
//! `admin` role. The role gate is fixed per route at construction.

use axum::routing::{get, put};
use axum::Router;

use super::handlers;
use crate::auth::middleware::{authenticate, require_role, RolePolicy};
use crate::auth::models::Role;
use crate::state::AppState;

pub fn user_router(state: AppState) -> Router {
    let admin_only = RolePolicy::new(Role::Admin);

    Router::new()
        .route("/:id", get(handlers::get_user))
        .route(
            "/:id",
            put(handlers::update_user).route_layer(axum::middleware::from_fn(
                move |request, next| require_role(admin_only.clone(), request, next),
            )),
        )
        .route_layer(axum::middleware::from_fn_with_state(state, authenticate))
}
