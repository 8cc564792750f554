use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::dto::is_valid_email;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{EditUserRequest, PublicUser};
use crate::users::repo::User;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(PublicUser::from(user))
}

/// The target row is always the caller's own; the id comes from the
/// verified token, never from the request body.
#[instrument(skip_all)]
pub async fn edit_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<EditUserRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let email = match payload.email.as_deref().map(str::trim) {
        Some(e) if !is_valid_email(e) => {
            return Err(ApiError::Validation("invalid email".into()));
        }
        other => other,
    };

    // Re-submitting the current email updates the row onto itself and does
    // not trip the unique constraint.
    let updated = User::update(
        &state.db,
        user.id,
        email,
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
    )
    .await
    .map_err(|e| {
        let err = ApiError::from(e);
        if matches!(err, ApiError::CredentialsTaken) {
            warn!(user_id = %user.id, "profile edit email already taken");
        }
        err
    })?;

    info!(user_id = %updated.id, "profile updated");
    Ok(Json(PublicUser::from(updated)))
}
