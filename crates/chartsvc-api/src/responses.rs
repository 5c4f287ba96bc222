//! Response envelope types
//!
//! Every JSON endpoint wraps its payload in `{data, meta?}`. List
//! responses always carry `meta.totalPages` so the dashboard can render
//! pagination controls without a second request.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response payload
    pub data: T,

    /// List metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Metadata attached to list responses
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Meta {
    /// Page count for the whole result set
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// Wrap a single payload without metadata
pub fn ok<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse { data, meta: None }
}

/// Wrap a list payload with its page count
pub fn paginated<T: Serialize>(data: T, total_pages: u64) -> ApiResponse<T> {
    ApiResponse {
        data,
        meta: Some(Meta { total_pages }),
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_envelope_omits_meta() {
        let json = serde_json::to_string(&ok("payload")).unwrap();
        assert_eq!(json, r#"{"data":"payload"}"#);
    }

    #[test]
    fn test_list_envelope_carries_total_pages() {
        let json = serde_json::to_string(&paginated(vec![1, 2], 3)).unwrap();
        assert_eq!(json, r#"{"data":[1,2],"meta":{"totalPages":3}}"#);
    }
}
