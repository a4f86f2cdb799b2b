use axum::Router;

pub mod accounts;
pub mod samples;
pub mod system;

/// Router for all store-backed endpoints.
///
/// Paths are registered literally (with their trailing slashes) to match
/// the published API contract; axum does not redirect between `/users` and
/// `/users/`.
pub fn router() -> Router {
    Router::new()
        .merge(accounts::router())
        .merge(samples::router())
}
