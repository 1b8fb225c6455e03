use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// The pool is capped at `DB_MAX_CONNECTIONS` and waiting for a free connection is bounded
/// by the same limit as any other store call, so an exhausted pool surfaces as a failed
/// request instead of a hung one.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .acquire_timeout(config.store_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
