//! The data access seam the HTTP layer depends on.

use async_trait::async_trait;
use roster_core::types::DbId;

use crate::error::StorageError;
use crate::models::person::Person;
use crate::repositories::PersonRepo;
use crate::DbPool;

/// The five person operations plus a liveness probe.
///
/// Mutating operations report nothing about whether a row was affected;
/// callers that care must read first.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError>;

    async fn get_person_by_id(&self, id: DbId) -> Result<Option<Person>, StorageError>;

    async fn add_person(&self, person: &Person) -> Result<(), StorageError>;

    async fn update_person(&self, person: &Person) -> Result<(), StorageError>;

    async fn delete_person(&self, id: DbId) -> Result<(), StorageError>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}

#[async_trait]
impl PersonStore for DbPool {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError> {
        PersonRepo::list(self).await
    }

    async fn get_person_by_id(&self, id: DbId) -> Result<Option<Person>, StorageError> {
        PersonRepo::find_by_id(self, id).await
    }

    async fn add_person(&self, person: &Person) -> Result<(), StorageError> {
        PersonRepo::add(self, person).await
    }

    async fn update_person(&self, person: &Person) -> Result<(), StorageError> {
        PersonRepo::update(self, person).await
    }

    async fn delete_person(&self, id: DbId) -> Result<(), StorageError> {
        PersonRepo::delete(self, id).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(self).await?;
        Ok(())
    }
}
