//! Repository for persons, backed entirely by stored procedures.
//!
//! Each call checks a connection out of the pool for its single round trip
//! and returns it when done. Nothing is retried.

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::models::person::Person;
use crate::procedures::StoredProcedure;

/// Provides data access for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// List every person, in whatever order `get_all_persons` yields.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, StorageError> {
        let proc = StoredProcedure::GetAllPersons;
        tracing::debug!(procedure = %proc, "Calling stored procedure");

        let sql = proc.statement();
        let mut conn = pool.acquire().await?;
        let persons = sqlx::query_as::<_, Person>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(persons)
    }

    /// Find a person by id.
    ///
    /// Returns `None` when the procedure yields no rows and
    /// [`StorageError::Cardinality`] when it yields more than one.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, StorageError> {
        let proc = StoredProcedure::GetPersonById;
        tracing::debug!(procedure = %proc, person_id = id, "Calling stored procedure");

        let sql = proc.statement();
        let mut conn = pool.acquire().await?;
        let mut rows = sqlx::query_as::<_, Person>(&sql)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(StorageError::Cardinality {
                procedure: proc.name(),
                rows: n,
            }),
        }
    }

    /// Insert a person with a caller-supplied id.
    ///
    /// A duplicate id fails at the database's primary key.
    pub async fn add(pool: &PgPool, person: &Person) -> Result<(), StorageError> {
        Self::write(pool, StoredProcedure::AddPerson, person).await
    }

    /// Overwrite name and salary for `person.id`.
    ///
    /// The procedure does not report affected rows, so an unknown id is a
    /// silent no-op.
    pub async fn update(pool: &PgPool, person: &Person) -> Result<(), StorageError> {
        Self::write(pool, StoredProcedure::UpdatePerson, person).await
    }

    /// Delete a person by id. An unknown id is a silent no-op.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), StorageError> {
        let proc = StoredProcedure::DeletePerson;
        tracing::debug!(procedure = %proc, person_id = id, "Calling stored procedure");

        let sql = proc.statement();
        let mut conn = pool.acquire().await?;
        sqlx::query(&sql)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn write(
        pool: &PgPool,
        proc: StoredProcedure,
        person: &Person,
    ) -> Result<(), StorageError> {
        tracing::debug!(procedure = %proc, person_id = person.id, "Calling stored procedure");

        let sql = proc.statement();
        let mut conn = pool.acquire().await?;
        sqlx::query(&sql)
            .bind(person.id)
            .bind(&person.name)
            .bind(person.salary)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
