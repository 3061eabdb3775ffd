use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
///
/// `error` carries the underlying failure message and is only present on
/// 500 responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Plain confirmation envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// Envelope wrapping a collection of results.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    pub msg: String,
    pub results: Vec<T>,
}

impl<T> ListDto<T> {
    pub fn ok(results: Vec<T>) -> Self {
        Self {
            msg: "ok".to_string(),
            results,
        }
    }
}

/// Envelope wrapping a single result.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDto<T> {
    pub msg: String,
    pub result: T,
}

impl<T> ItemDto<T> {
    pub fn ok(result: T) -> Self {
        Self {
            msg: "ok".to_string(),
            result,
        }
    }
}
