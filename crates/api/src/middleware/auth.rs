//! Basic-Auth admin extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use flashcards_core::error::CoreError;

use crate::auth::basic::BasicCredentials;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::state::AppState;

/// The configured administrator, authenticated with HTTP Basic credentials.
///
/// Use this as an extractor parameter in any handler that is admin-only:
///
/// ```ignore
/// async fn my_handler(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin = %admin.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Nothing is stored between requests; every call re-checks the header.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

pub struct RequireAdmin(pub AdminUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let credentials = BasicCredentials::parse(header)
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Basic <credentials>"))?;

        let admin = &state.config.admin;
        if credentials.username != admin.username {
            tracing::warn!(username = %credentials.username, "Rejected admin login");
            return Err(unauthorized("Invalid credentials"));
        }

        // Argon2 is CPU-bound; keep it off the async worker threads.
        let password = credentials.password.clone();
        let hash = admin.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password check task failed: {e}")))?
            .map_err(|e| AppError::InternalError(format!("Stored admin hash is invalid: {e}")))?;
        if !verified {
            tracing::warn!(username = %credentials.username, "Rejected admin login");
            return Err(unauthorized("Invalid credentials"));
        }

        Ok(RequireAdmin(AdminUser {
            username: credentials.username,
        }))
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
