//! User service for business logic.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{
        store::{ReadError, WriteError},
        AppError,
    },
    model::user::{CreateUserParam, User},
    util::timeout::within,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `timeout` - Bound applied to each store call
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::WriteErr)` - The store rejected the insert or timed out
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = within::<_, WriteError, _>(
            self.timeout,
            UserRepository::new(self.db).create(param),
        )
        .await?;

        tracing::info!("Created user {} ({})", user.id, user.name);

        Ok(user)
    }

    /// Retrieves all users ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users =
            within::<_, ReadError, _>(self.timeout, UserRepository::new(self.db).get_all())
                .await?;

        Ok(users)
    }
}
