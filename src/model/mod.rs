//! API contract types.
//!
//! Request and response bodies exchanged over HTTP. Every response body is a JSON
//! object carrying a `msg` field; these types fix that shape per endpoint.

pub mod api;
pub mod catalog;
pub mod user;
