//! Page cursor for list endpoints backed by the v3 API.

use serde::{Deserialize, Serialize};

/// Page size the backend uses when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Page request for signature listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePage {
    pub page_size: u32,
    /// Opaque cursor returned by the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
}

impl Default for SignaturePage {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            next_key: None,
        }
    }
}

impl SignaturePage {
    /// First page with the given size.
    pub fn with_size(page_size: u32) -> Self {
        Self {
            page_size,
            next_key: None,
        }
    }

    /// Continue from `next_key`.
    pub fn after(mut self, next_key: impl Into<String>) -> Self {
        self.next_key = Some(next_key.into());
        self
    }

    /// The cursor, if it carries anything besides whitespace.
    pub fn cursor(&self) -> Option<&str> {
        self.next_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Query string, including the leading `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cla_core::SignaturePage;
    ///
    /// assert_eq!(SignaturePage::default().query_string(), "?pageSize=50");
    /// assert_eq!(
    ///     SignaturePage::with_size(20).after("abc").query_string(),
    ///     "?pageSize=20&nextKey=abc"
    /// );
    /// ```
    pub fn query_string(&self) -> String {
        let mut query = format!("?pageSize={}", self.page_size);
        if let Some(key) = self.cursor() {
            query.push_str("&nextKey=");
            query.push_str(&urlencoding::encode(key));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = SignaturePage::default();
        assert_eq!(page.page_size, 50);
        assert_eq!(page.next_key, None);
        assert_eq!(page.query_string(), "?pageSize=50");
    }

    #[test]
    fn test_page_with_cursor() {
        let page = SignaturePage::with_size(20).after("abc");
        assert_eq!(page.query_string(), "?pageSize=20&nextKey=abc");
    }

    #[test]
    fn test_empty_cursor_is_omitted() {
        let page = SignaturePage::default().after("");
        assert_eq!(page.query_string(), "?pageSize=50");
        assert_eq!(page.cursor(), None);
    }

    #[test]
    fn test_whitespace_cursor_is_omitted() {
        let page = SignaturePage::default().after("   ");
        assert_eq!(page.query_string(), "?pageSize=50");
    }

    #[test]
    fn test_cursor_is_encoded() {
        let page = SignaturePage::default().after("a+b=");
        assert_eq!(page.query_string(), "?pageSize=50&nextKey=a%2Bb%3D");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(SignaturePage::with_size(10).after("k")).unwrap();
        assert_eq!(json, serde_json::json!({ "pageSize": 10, "nextKey": "k" }));
    }
}
