use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use tracing::{info, instrument, warn};

use crate::auth::dto::{CredentialsRequest, LoginResponse};
use crate::auth::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::PublicUser;
use crate::users::repo::User;

const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    // Verified against when the email is unknown, so a login miss costs
    // the same hash check as a wrong password.
    static ref DUMMY_HASH: String =
        hash_password("placeholder-never-matches").unwrap_or_default();
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let (email, password) = payload.validate()?;
    if password.len() < MIN_PASSWORD_LEN {
        warn!("signup password too short");
        return Err(ApiError::Validation("password too short".into()));
    }

    let hash = hash_password(password)?;

    // Uniqueness is enforced by the store; a conflicting insert comes back
    // as a unique violation and translates to CredentialsTaken.
    let user = User::create(&state.db, email, &hash).await.map_err(|e| {
        let err = ApiError::from(e);
        if matches!(err, ApiError::CredentialsTaken) {
            warn!(email = %email, "signup email already taken");
        }
        err
    })?;

    info!(user_id = %user.id, "user signed up");
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = payload.validate()?;

    let user = match User::find_by_email(&state.db, email).await? {
        Some(u) => u,
        None => {
            let _ = verify_password(password, &DUMMY_HASH);
            warn!("login with unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = verify_password(password, &user.password_hash).map_err(|_| {
        // Malformed stored hash is a data-integrity problem; to the caller
        // it is just a failed login.
        ApiError::InvalidCredentials
    })?;
    if !ok {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.jwt.sign(user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        user: PublicUser::from(user),
        access_token,
    }))
}
