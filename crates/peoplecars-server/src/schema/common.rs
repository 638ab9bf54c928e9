//! Common API response wrapper types.
//!
//! [`ApiResponse`] provides the standard envelope for all successful API
//! responses. The `success` field is always `true` here; error responses are
//! produced by `ApiError::into_response` with the same outer shape.

use serde::Serialize;

/// Standard API response envelope.
///
/// `data` is always present: an absent record on the read path serializes as
/// an explicit `null` rather than an omitted field, so "empty result" is
/// visible on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Response payload, `null` for an empty result.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response wrapping the payload.
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data,
        }
    }
}
