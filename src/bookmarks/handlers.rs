use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractors::CurrentUser;
use crate::bookmarks::dto::{CreateBookmarkRequest, EditBookmarkRequest, Pagination};
use crate::bookmarks::repo::Bookmark;
use crate::error::ApiError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks/:id", get(get_bookmark))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", post(create_bookmark))
        .route(
            "/bookmarks/:id",
            axum::routing::patch(edit_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip_all)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = Bookmark::list_by_owner(&state.db, user.id, p.limit, p.offset).await?;
    Ok(Json(bookmarks))
}

#[instrument(skip_all)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    let (title, link) = payload.validate()?;
    // The owner is always the caller, whatever the body claims.
    let bookmark = Bookmark::create(
        &state.db,
        user.id,
        title,
        link,
        payload.description.as_deref(),
    )
    .await?;
    info!(bookmark_id = %bookmark.id, "bookmark created");
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip_all, fields(bookmark_id = %id))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = Bookmark::find(&state.db, user.id, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(bookmark))
}

#[instrument(skip_all, fields(bookmark_id = %id))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = Bookmark::update(
        &state.db,
        user.id,
        id,
        payload.title.as_deref(),
        payload.link.as_deref(),
        payload.description.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound)?;
    info!("bookmark updated");
    Ok(Json(bookmark))
}

#[instrument(skip_all, fields(bookmark_id = %id))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Bookmark::delete(&state.db, user.id, id).await? {
        return Err(ApiError::NotFound);
    }
    info!("bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
