pub mod health;
pub mod persons;

use axum::Router;

use crate::state::AppState;

/// Collection path for persons; also the `Location` returned on create.
pub const PERSONS_PATH: &str = "/persons";

/// Build the person route tree.
///
/// ```text
/// /persons           list, create
/// /persons/{id}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(PERSONS_PATH, persons::router())
}
