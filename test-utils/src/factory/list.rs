//! List factory for creating test list entities.

use crate::factory::helpers::{alpha_suffix, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ListFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    board_id: Uuid,
}

impl<'a> ListFactory<'a> {
    /// Creates a new ListFactory with default values.
    ///
    /// Defaults:
    /// - name: `"List{letters}"`, alphabetic so it would also pass request validation
    pub fn new(db: &'a DatabaseConnection, board_id: Uuid) -> Self {
        Self {
            db,
            name: format!("List{}", alpha_suffix(next_id())),
            board_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::list::Model, DbErr> {
        entity::list::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            board_id: ActiveValue::Set(self.board_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list on the given board.
pub async fn create_list(
    db: &DatabaseConnection,
    board_id: Uuid,
) -> Result<entity::list::Model, DbErr> {
    ListFactory::new(db, board_id).build().await
}
