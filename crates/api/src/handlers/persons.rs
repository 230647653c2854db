//! Handlers for the person endpoints.
//!
//! Each handler is a pass-through to one stored procedure, except update and
//! delete, which first read the person so an unknown id yields 404 instead of
//! reaching a write procedure that would silently do nothing.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::person::{Person, UpdatePerson};
use roster_db::PersonStore;

use crate::error::{AppError, AppResult};
use crate::routes::PERSONS_PATH;
use crate::state::AppState;

/// GET /persons
///
/// List every person. An empty table yields an empty array.
pub async fn list_persons(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let persons = state.store.list_persons().await?;

    Ok(Json(persons))
}

/// GET /persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = ensure_person_exists(state.store.as_ref(), id).await?;

    Ok(Json(person))
}

/// POST /persons
///
/// Create a person with a caller-supplied id. A duplicate id is rejected by
/// the database, not here.
///
/// The body echoes the request. `salary` is stored as `NUMERIC(18,2)`, so a
/// value with more than two decimal places reads back rounded on a later GET.
pub async fn create_person(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> AppResult<impl IntoResponse> {
    state.store.add_person(&person).await?;

    tracing::info!(person_id = person.id, name = %person.name, "Person created");

    Ok((StatusCode::CREATED, [(LOCATION, PERSONS_PATH)], Json(person)))
}

/// PUT /persons/{id}
///
/// Replace name and salary. The path id overrides any id in the body.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<impl IntoResponse> {
    ensure_person_exists(state.store.as_ref(), id).await?;

    let person = input.into_person(id);
    state.store.update_person(&person).await?;

    tracing::info!(person_id = id, name = %person.name, "Person updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /persons/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_person_exists(state.store.as_ref(), id).await?;

    state.store.delete_person(id).await?;

    tracing::info!(person_id = id, "Person deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Read a person, mapping absence to [`CoreError::NotFound`].
///
/// Not atomic with any following write: the row can disappear in between.
async fn ensure_person_exists(store: &dyn PersonStore, id: DbId) -> AppResult<Person> {
    store
        .get_person_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
}
