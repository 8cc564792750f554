use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use jsonwebtoken::errors::ErrorKind;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Resolved identity of the caller, attached by verifying the bearer token
/// and re-reading the user row. This extractor is the only channel through
/// which handlers learn who is calling.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(ApiError::Unauthenticated)?;

        let claims = state.jwt.verify(token).map_err(|e| {
            // Logged for diagnostics; the response stays generic either way.
            match e.kind() {
                ErrorKind::ExpiredSignature => warn!("expired token"),
                ErrorKind::InvalidSignature => warn!("token signature mismatch"),
                other => warn!(kind = ?other, "malformed token"),
            }
            ApiError::Unauthenticated
        })?;

        // Claims may outlive the account; do not trust a stale subject.
        let user = User::find_by_id(&state.db, claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %claims.sub, "token subject no longer exists");
                ApiError::Unauthenticated
            })?;

        Ok(CurrentUser(user))
    }
}
