//! HTTP request handlers.
//!
//! Controllers extract path parameters and bodies, convert DTOs to parameters, call a
//! service and convert the resulting domain models back to DTOs inside the response
//! envelope. Errors propagate as `AppError`, which renders the error envelope.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    model::api::ListDto,
    server::{error::AppError, state::AppState},
};

/// Wraps a collection in the `{msg, results}` envelope.
///
/// An empty collection is answered with 400 and `empty_msg` unless the state's
/// empty list policy is turned off.
fn list_response<T: Serialize>(
    state: &AppState,
    results: Vec<T>,
    empty_msg: &str,
) -> Result<Response, AppError> {
    if results.is_empty() && state.empty_list_as_error {
        return Err(AppError::BadRequest(empty_msg.to_string()));
    }

    Ok((StatusCode::OK, Json(ListDto::ok(results))).into_response())
}
