//! Jikan API v4 envelope types.
//!
//! Every response is wrapped either in `{data}` or `{data, pagination}`;
//! failures come back as the error envelope.

use serde::{Deserialize, Serialize};

/// Single-payload envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanResponse<T> {
    pub data: T,
}

/// Paginated envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanPaginatedResponse<T> {
    pub data: T,
    pub pagination: Pagination,
}

/// Pagination metadata
///
/// `current_page` and `items` are not sent by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationItems {
    pub count: u32,
    pub total: u32,
    pub per_page: u32,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub report_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_without_current_page() {
        let pagination: Pagination = serde_json::from_value(json!({
            "last_visible_page": 14,
            "has_next_page": true
        }))
        .unwrap();

        assert_eq!(pagination.last_visible_page, 14);
        assert!(pagination.has_next_page);
        assert_eq!(pagination.current_page, None);
        assert_eq!(pagination.items, None);

        // Absent fields stay absent when re-serialized
        let value = serde_json::to_value(&pagination).unwrap();
        assert!(value.get("current_page").is_none());
    }

    #[test]
    fn test_pagination_with_items() {
        let pagination: Pagination = serde_json::from_value(json!({
            "last_visible_page": 3,
            "has_next_page": false,
            "current_page": 3,
            "items": { "count": 7, "total": 57, "per_page": 25 }
        }))
        .unwrap();

        assert_eq!(pagination.current_page, Some(3));
        assert_eq!(pagination.items.unwrap().total, 57);
    }
}
