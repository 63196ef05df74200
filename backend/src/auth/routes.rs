//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle sign-up, sign-in, and sign-out. They are placeholders:
//! token issuance, sessions, and password handling all live outside this
//! backend, so the handlers return static text only. Designed to be nested
//! into the main Axum router.

use axum::routing::post;
use axum::Router;

use super::handlers;

pub fn auth_router() -> Router {
    Router::new()
        .route("/sign-up", post(handlers::sign_up))
        .route("/sign-in", post(handlers::sign_in))
        .route("/sign-out", post(handlers::sign_out))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn post_to(path: &str) -> (StatusCode, String) {
        let response = auth_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn auth_routes_answer_with_placeholders() {
        for (path, expected) in [
            ("/sign-up", "POST /api/auth/sign-up response"),
            ("/sign-in", "POST /api/auth/sign-in response"),
            ("/sign-out", "POST /api/auth/sign-out response"),
        ] {
            let (status, body) = post_to(path).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, expected);
        }
    }
}
