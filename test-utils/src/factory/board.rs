//! Board factory for creating boards with their admin membership.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test boards.
///
/// The board row and its admin `board_users` row are inserted together so factory
/// boards look like boards created through the API.
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    admin_user_id: Uuid,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Board {n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `admin_user_id` - ID of an existing user who becomes the board admin
    pub fn new(db: &'a DatabaseConnection, admin_user_id: Uuid) -> Self {
        Self {
            db,
            name: format!("Board {}", next_id()),
            admin_user_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the board and admin membership.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        let board = entity::board::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await?;

        entity::board_user::ActiveModel {
            board_id: ActiveValue::Set(board.id),
            user_id: ActiveValue::Set(self.admin_user_id),
            is_admin: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await?;

        Ok(board)
    }
}

/// Creates a board administered by the given user.
pub async fn create_board(
    db: &DatabaseConnection,
    admin_user_id: Uuid,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, admin_user_id).build().await
}
