//! Person model and request DTOs.

use roster_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row returned by `get_all_persons` / `get_person_by_id`.
///
/// Also the create payload: the caller supplies the id. `salary` travels as
/// an exact JSON number, never through `f64`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for replacing a person's name and salary.
///
/// A body `id` is accepted but ignored; the id from the request path wins.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

impl UpdatePerson {
    /// Build the record to store under `id`.
    pub fn into_person(self, id: DbId) -> Person {
        Person {
            id,
            name: self.name,
            salary: self.salary,
        }
    }
}
