#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::state::AppState;
use roster_core::types::DbId;
use roster_db::models::person::Person;
use roster_db::procedures::StoredProcedure;
use roster_db::{PersonStore, StorageError};

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A [`PersonStore`] that behaves like the stored procedures (silent no-op
/// writes, primary key on insert) and records every routine it was asked to
/// run.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<DbId, Person>>,
    calls: Mutex<Vec<StoredProcedure>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store whose every call fails as if the pool were exhausted.
    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            unavailable: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<StoredProcedure> {
        self.calls.lock().unwrap().clone()
    }

    pub fn row(&self, id: DbId) -> Option<Person> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn record(&self, proc: StoredProcedure) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(proc);
        if self.unavailable {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError> {
        self.record(StoredProcedure::GetAllPersons)?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_person_by_id(&self, id: DbId) -> Result<Option<Person>, StorageError> {
        self.record(StoredProcedure::GetPersonById)?;
        Ok(self.row(id))
    }

    async fn add_person(&self, person: &Person) -> Result<(), StorageError> {
        self.record(StoredProcedure::AddPerson)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&person.id) {
            return Err(StorageError::Database(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint \"persons_pkey\" ({})",
                person.id
            ))));
        }
        rows.insert(person.id, person.clone());
        Ok(())
    }

    async fn update_person(&self, person: &Person) -> Result<(), StorageError> {
        self.record(StoredProcedure::UpdatePerson)?;
        if let Some(row) = self.rows.lock().unwrap().get_mut(&person.id) {
            row.name = person.name.clone();
            row.salary = person.salary;
        }
        Ok(())
    }

    async fn delete_person(&self, id: DbId) -> Result<(), StorageError> {
        self.record(StoredProcedure::DeletePerson)?;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState { store };
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
