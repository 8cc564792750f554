use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl CreateBookmarkRequest {
    pub(crate) fn validate(&self) -> Result<(&str, &str), ApiError> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Validation("title is required".into()))?;
        let link = self
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ApiError::Validation("link is required".into()))?;
        Ok((title, link))
    }
}

/// Partial edit; absent fields keep their current value. An owner field in
/// the body is simply ignored.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_link() {
        let empty: CreateBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(empty.validate(), Err(ApiError::Validation(_))));

        let no_link: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert!(matches!(no_link.validate(), Err(ApiError::Validation(_))));

        let blank_title: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title":"  ","link":"https://x"}"#).unwrap();
        assert!(matches!(blank_title.validate(), Err(ApiError::Validation(_))));

        let ok: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title":"t","link":"https://x"}"#).unwrap();
        assert_eq!(ok.validate().unwrap(), ("t", "https://x"));
    }

    #[test]
    fn owner_fields_in_body_are_dropped() {
        let req: CreateBookmarkRequest = serde_json::from_str(
            r#"{"title":"t","link":"https://x","ownerId":"someone-else"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, 100);
        assert_eq!(p.offset, 0);
    }
}
