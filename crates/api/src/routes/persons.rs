//! Route definitions for persons.

use axum::routing::get;
use axum::Router;

use crate::handlers::persons;
use crate::state::AppState;

/// Person routes mounted at `/persons`.
///
/// ```text
/// GET    /          -> list_persons
/// POST   /          -> create_person
/// GET    /{id}      -> get_person
/// PUT    /{id}      -> update_person
/// DELETE /{id}      -> delete_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(persons::list_persons).post(persons::create_person))
        .route(
            "/{id}",
            get(persons::get_person)
                .put(persons::update_person)
                .delete(persons::delete_person),
        )
}
