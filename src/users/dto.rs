use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Public part of the user returned to clients. The password hash has no
/// field here, so no exit path can leak it.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
        }
    }
}

/// Partial profile edit; absent fields are left untouched. Unknown fields
/// in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub email: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_has_no_hash_field() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            first_name: Some("Ada".into()),
            last_name: None,
            created_at: OffsetDateTime::now_utc(),
        };
        let value = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["first_name"], "Ada");
    }

    #[test]
    fn edit_request_ignores_unknown_fields() {
        let req: EditUserRequest = serde_json::from_str(
            r#"{"firstName":"Ada","id":"client-supplied","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert!(req.email.is_none());
    }
}
