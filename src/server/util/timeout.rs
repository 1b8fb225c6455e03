use std::{future::Future, time::Duration};

use sea_orm::DbErr;

use crate::server::error::store::StoreTimeout;

/// Bounds a single store call.
///
/// # Arguments
/// - `limit` - Maximum time the call may take
/// - `call` - The store call
///
/// # Returns
/// - `Ok(T)` - The call finished in time and succeeded
/// - `Err(E)` - The call failed (`E::from(DbErr)`) or exceeded `limit` (`E::timed_out`)
pub async fn within<T, E, F>(limit: Duration, call: F) -> Result<T, E>
where
    F: Future<Output = Result<T, DbErr>>,
    E: From<DbErr> + StoreTimeout,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(E::from),
        Err(_) => Err(E::timed_out(limit)),
    }
}
