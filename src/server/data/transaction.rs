//! All-or-nothing execution of dependent writes.
//!
//! `AtomicWriter` checks out one connection, opens a transaction on it and hands the
//! transaction to a sequence of steps. The steps run strictly in order on that single
//! connection; a step that needs an earlier step's result (such as a generated id) simply
//! uses the value returned by that step. The transaction commits only if every step
//! succeeds and is rolled back otherwise.
//!
//! The connection goes back to the pool on every exit path: after commit, after rollback,
//! and when the run is abandoned on timeout (dropping a `DatabaseTransaction` rolls it back).

use std::{future::Future, pin::Pin, time::Duration};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::error::store::WriteError;

/// Boxed step sequence run inside one transaction.
pub type Steps<'c, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>;

pub struct AtomicWriter<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> AtomicWriter<'a> {
    /// Creates a writer over the shared pool.
    ///
    /// # Arguments
    /// - `db` - Connection pool to check a transaction connection out of
    /// - `timeout` - Bound on the whole run, from `BEGIN` to `COMMIT`
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Runs `steps` inside a single transaction.
    ///
    /// # Arguments
    /// - `steps` - Writes to run in order on the transaction; the value they resolve to
    ///   is returned after commit
    ///
    /// # Returns
    /// - `Ok(T)` - Every step succeeded and the transaction committed
    /// - `Err(WriteError::Store)` - A step, `BEGIN` or `COMMIT` failed; nothing persisted
    /// - `Err(WriteError::Timeout)` - The run exceeded the timeout; nothing persisted
    pub async fn run<T, F>(&self, steps: F) -> Result<T, WriteError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> Steps<'c, T> + Send,
    {
        match tokio::time::timeout(self.timeout, self.run_steps(steps)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    "Atomic write abandoned after {:?}, transaction rolled back",
                    self.timeout
                );
                Err(WriteError::Timeout(self.timeout))
            }
        }
    }

    async fn run_steps<T, F>(&self, steps: F) -> Result<T, WriteError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> Steps<'c, T> + Send,
    {
        let txn = self.db.begin().await?;

        let outcome = steps(&txn).await;

        match outcome {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                // Best effort; the step error is returned either way.
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!("Rollback failed after write error: {}", rollback_err);
                }
                Err(WriteError::Store(err))
            }
        }
    }
}
