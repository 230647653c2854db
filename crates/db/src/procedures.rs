//! The stored routines the service is allowed to call.
//!
//! The data access layer never builds free-form SQL: every statement it
//! sends comes from [`StoredProcedure::statement`]. Row-returning routines
//! are PostgreSQL functions selected from; write routines are procedures
//! invoked with `CALL`.

use std::fmt;

/// Columns every row-returning routine yields, in order.
pub const PERSON_COLUMNS: &str = "id, name, salary";

/// A named routine with a fixed parameter list and result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoredProcedure {
    /// `() -> rows`
    GetAllPersons,
    /// `(id) -> 0..1 rows`
    GetPersonById,
    /// `(id, name, salary)`
    AddPerson,
    /// `(id, name, salary)`, unconditional update by id
    UpdatePerson,
    /// `(id)`, unconditional delete by id
    DeletePerson,
}

impl StoredProcedure {
    /// Name of the routine in the database.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetAllPersons => "get_all_persons",
            Self::GetPersonById => "get_person_by_id",
            Self::AddPerson => "add_person",
            Self::UpdatePerson => "update_person",
            Self::DeletePerson => "delete_person",
        }
    }

    /// Number of positional parameters the routine takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::GetAllPersons => 0,
            Self::GetPersonById | Self::DeletePerson => 1,
            Self::AddPerson | Self::UpdatePerson => 3,
        }
    }

    /// Whether the routine yields person rows.
    pub const fn returns_rows(self) -> bool {
        matches!(self, Self::GetAllPersons | Self::GetPersonById)
    }

    /// The statement text to prepare, with `$n` placeholders for binding.
    pub fn statement(self) -> String {
        let params = (1..=self.arity())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let name = self.name();

        if self.returns_rows() {
            format!("SELECT {PERSON_COLUMNS} FROM {name}({params})")
        } else {
            format!("CALL {name}({params})")
        }
    }
}

impl fmt::Display for StoredProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
