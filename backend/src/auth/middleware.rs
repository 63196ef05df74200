//! Middleware for protecting authenticated routes and handling authorization.
//!
//! Two gates are defined here. [`authenticate`] resolves a credential token
//! from the request, verifies it, and attaches the decoded identity to the
//! request extensions. [`require_role`] runs after it and checks the
//! identity's role claim against a per-route [`RolePolicy`]. Either gate may
//! short-circuit the request with a JSON error response.

use std::sync::OnceLock;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use regex::Regex;

use crate::auth::errors::AuthError;
use crate::auth::models::{Claims, Role};
use crate::errors::ApiError;
use crate::state::AppState;

/// Request location a credential token was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Structured cookie `auth_token` or `token`.
    Cookie,
    /// `Authorization: Bearer <token>` header.
    AuthorizationHeader,
    /// Manual scan of the raw `Cookie` header.
    RawCookieHeader,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Cookie => "cookie",
            TokenSource::AuthorizationHeader => "authorization_header",
            TokenSource::RawCookieHeader => "raw_cookie_header",
        }
    }
}

/// A credential token together with the location it came from.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub source: TokenSource,
    pub value: String,
}

/// Ordered extractor chain; the first strategy yielding a non-empty token wins.
const EXTRACTORS: &[(TokenSource, fn(&CookieJar, &HeaderMap) -> Option<String>)] = &[
    (TokenSource::Cookie, structured_cookie),
    (TokenSource::AuthorizationHeader, bearer_header),
    (TokenSource::RawCookieHeader, raw_cookie_fallback),
];

/// Resolve a credential token from the request, trying sources in strict
/// precedence order: structured cookies, Authorization header, raw Cookie
/// header scan. No fallback combination; the first match is used as-is.
pub fn resolve_token(jar: &CookieJar, headers: &HeaderMap) -> Option<ResolvedToken> {
    EXTRACTORS.iter().find_map(|(source, extract)| {
        extract(jar, headers)
            .filter(|token| !token.is_empty())
            .map(|value| ResolvedToken {
                source: *source,
                value,
            })
    })
}

fn structured_cookie(jar: &CookieJar, _headers: &HeaderMap) -> Option<String> {
    // Emptiness is filtered per name so an empty `auth_token` cookie does
    // not shadow a non-empty `token` cookie.
    cookie_value(jar, "auth_token").or_else(|| cookie_value(jar, "token"))
}

fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

fn bearer_header(_jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split(' ');
    let scheme = parts.next()?;
    let token = parts.next()?;
    // Exactly two space-separated parts, scheme matched case-insensitively.
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token.to_string())
}

/// Raw `Cookie` header scan, used only when structured cookie parsing yielded
/// no non-empty value for either recognized cookie name. Kept as a separate
/// path from structured parsing; the two are not merged.
fn raw_cookie_fallback(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if structured_cookie(jar, headers).is_some() {
        return None;
    }
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    let captured = raw_cookie_regex().captures(raw)?.get(1)?.as_str();
    // A value that fails percent-decoding is dropped, not used raw.
    urlencoding::decode(captured)
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn raw_cookie_regex() -> &'static Regex {
    static RAW_COOKIE_RE: OnceLock<Regex> = OnceLock::new();
    RAW_COOKIE_RE
        .get_or_init(|| Regex::new(r"(?i)(?:^|;\s*)(?:auth_token|token)=([^;]+)").unwrap())
}

/// First 8 characters of a token for diagnostics. Full tokens are never logged.
fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(8).collect();
    format!("{head}...")
}

/// Authentication gate.
///
/// Resolves a credential token, verifies it, and inserts the decoded
/// [`Claims`] into the request extensions before running the next handler.
/// Rejects with 401 when no credential is present and 403 when verification
/// fails; both are terminal for the request.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();
    let resolved = resolve_token(&jar, request.headers());

    if state.config.verbose_auth_logging {
        let source = resolved
            .as_ref()
            .map(|token| token.source.as_str())
            .unwrap_or("none");
        let preview = resolved.as_ref().map(|token| token_preview(&token.value));
        tracing::info!(
            source,
            token_preview = preview.as_deref(),
            path = %path,
            "auth token lookup"
        );
    }

    let Some(resolved) = resolved else {
        tracing::warn!(path = %path, "no token provided");
        return Err(AuthError::NoCredential.into());
    };

    match state.verifier.verify(&resolved.value).await {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(err) => {
            tracing::error!(path = %path, error = %err, "token verification failed");
            Err(err.into())
        }
    }
}

/// Per-route role allow-list, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    allowed: Vec<Role>,
}

impl RolePolicy {
    /// Build a policy from a single role or a list of roles; a single role
    /// is normalized into a one-element list.
    pub fn new(allowed: impl Into<RolePolicy>) -> Self {
        allowed.into()
    }

    /// Check an identity against the allow-list.
    ///
    /// A missing identity is reported as [`AuthError::NotAuthenticated`]
    /// even though gate ordering should make it impossible; the re-check is
    /// kept so a misordered route still fails closed.
    pub fn check(&self, claims: Option<&Claims>, path: &str) -> Result<(), AuthError> {
        let claims = claims.ok_or(AuthError::NotAuthenticated)?;
        if !self.allowed.contains(&claims.role) {
            tracing::warn!(
                user_id = claims.id,
                required_roles = ?self.allowed,
                user_role = %claims.role,
                path = %path,
                "insufficient permissions"
            );
            return Err(AuthError::InsufficientRole {
                actual: claims.role,
            });
        }
        Ok(())
    }
}

impl From<Role> for RolePolicy {
    fn from(role: Role) -> Self {
        Self {
            allowed: vec![role],
        }
    }
}

impl From<Vec<Role>> for RolePolicy {
    fn from(allowed: Vec<Role>) -> Self {
        Self { allowed }
    }
}

/// Role-authorization gate; must be layered after [`authenticate`].
///
/// Any internal failure while evaluating the policy surfaces as a 500
/// rather than an authentication or authorization failure.
pub async fn require_role(
    policy: RolePolicy,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();
    match policy.check(request.extensions().get::<Claims>(), &path) {
        Ok(()) => Ok(next.run(request).await),
        Err(err @ AuthError::RoleCheck(_)) => {
            tracing::error!(path = %path, error = %err, "role verification failed");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
