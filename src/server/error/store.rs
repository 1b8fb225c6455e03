//! Errors surfaced by store operations.
//!
//! Writes and reads are kept apart because the HTTP layer reports them differently.
//! Both carry a `Timeout` variant for store calls that exceed the configured bound.

use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Failure of an insert, a conditional insert, or an atomic multi-step write.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The store rejected the statement (constraint or foreign key violation,
    /// connectivity failure, ...). Any open transaction has been rolled back.
    #[error("{0}")]
    Store(#[from] DbErr),

    /// The write did not finish within the store timeout. Any open transaction has
    /// been dropped, which rolls it back and returns its connection to the pool.
    #[error("Write did not complete within {0:?}")]
    Timeout(Duration),
}

/// Failure of a non-transactional read.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Store(#[from] DbErr),

    #[error("Read did not complete within {0:?}")]
    Timeout(Duration),
}

/// Store errors that can represent an elapsed store timeout.
pub trait StoreTimeout {
    fn timed_out(limit: Duration) -> Self;
}

impl StoreTimeout for WriteError {
    fn timed_out(limit: Duration) -> Self {
        Self::Timeout(limit)
    }
}

impl StoreTimeout for ReadError {
    fn timed_out(limit: Duration) -> Self {
        Self::Timeout(limit)
    }
}
