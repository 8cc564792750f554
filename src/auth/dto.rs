use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::users::dto::PublicUser;

/// Request body for signup and login. Fields are optional at the serde
/// level so a missing field becomes a 400, not a framework rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: PublicUser,
    pub access_token: String,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl CredentialsRequest {
    /// Presence and shape checks shared by signup and login.
    pub(crate) fn validate(&self) -> Result<(&str, &str), ApiError> {
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ApiError::Validation("email is required".into()))?;
        if !is_valid_email(email) {
            return Err(ApiError::Validation("invalid email".into()));
        }
        let password = self
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::Validation("password is required".into()))?;
        Ok((email, password))
    }
}
