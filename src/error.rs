use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-level failure taxonomy. The variant decides the external status
/// code; services return the variant and never pick codes themselves.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    /// Unknown email and wrong password collapse into this one variant so
    /// both produce identical responses.
    #[error("incorrect credentials")]
    InvalidCredentials,
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("credentials taken")]
    CredentialsTaken,
    /// Also covers resources owned by someone else; absence and foreign
    /// ownership must stay indistinguishable.
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::CredentialsTaken,
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::CredentialsTaken => StatusCode::FORBIDDEN,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: ApiError) -> (StatusCode, String) {
        let res = err.into_response();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn status_codes_match_taxonomy() {
        assert_eq!(
            body_of(ApiError::Validation("email is required".into()))
                .await
                .0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            body_of(ApiError::InvalidCredentials).await.0,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            body_of(ApiError::CredentialsTaken).await.0,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            body_of(ApiError::Unauthenticated).await.0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(body_of(ApiError::NotFound).await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_credentials_body_is_fixed() {
        // Unknown email and wrong password both map here; the rendered
        // response must be byte-identical between the two.
        let (status_a, body_a) = body_of(ApiError::InvalidCredentials).await;
        let (status_b, body_b) = body_of(ApiError::InvalidCredentials).await;
        assert_eq!(status_a, status_b);
        assert_eq!(body_a, body_b);
        assert_eq!(body_a, r#"{"error":"incorrect credentials"}"#);
    }

    #[tokio::test]
    async fn internal_errors_are_masked() {
        let (status, body) =
            body_of(ApiError::Internal(anyhow::anyhow!("pool timed out: secret dsn"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("secret dsn"));
        assert!(body.contains("internal server error"));
    }

    #[tokio::test]
    async fn row_not_found_maps_to_not_found() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound));
    }
}
