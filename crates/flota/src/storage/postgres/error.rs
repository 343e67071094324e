//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `flota_core::storage`.
//! Pool and I/O problems become `ConnectionFailed` (503) while query
//! problems become `QueryFailed` (500); handlers replace either with a
//! generic public message.

use flota_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool exhaustion/closure, I/O and TLS failures → `ConnectionFailed`
/// - Row decoding problems → `InvalidData`
/// - All other errors → `QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => RepositoryError::InvalidData(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
