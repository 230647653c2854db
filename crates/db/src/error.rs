/// Failure of a stored-procedure round trip.
///
/// Connection failures and constraint violations (e.g. a duplicate person id)
/// arrive as [`StorageError::Database`]; the procedures themselves report
/// nothing beyond their rows.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{procedure} returned {rows} rows, expected at most one")]
    Cardinality { procedure: &'static str, rows: usize },
}
