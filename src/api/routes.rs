//! src/api/routes.rs
//!
//! Handlers for the HTTP endpoints served by the `ApiServer`.

/// The handler for `GET /`. Returns the service's canned greeting.
pub async fn root() -> &'static str {
    "Hello, Flask!"
}
