//! Board and board membership repositories.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::board::Board;

pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a board row with a freshly generated id.
    ///
    /// A board must not outlive a failed admin insert, so callers run this inside an
    /// `AtomicWriter` together with `BoardUserRepository::create`.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, name: String) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await
    }

    /// Gets every board paired with each of its admins.
    ///
    /// A board with several admins appears once per admin.
    pub async fn get_all_with_admin(&self) -> Result<Vec<Board>, DbErr> {
        let rows = entity::prelude::BoardUser::find()
            .filter(entity::board_user::Column::IsAdmin.eq(true))
            .find_also_related(entity::prelude::Board)
            .order_by_asc(entity::board::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, board)| {
                board.map(|board| Board::from_entity(board, membership))
            })
            .collect())
    }
}

pub struct BoardUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership row linking a user to a board.
    ///
    /// Strict insert: an existing `(board_id, user_id)` pair, an unknown board or an
    /// unknown user is an error.
    pub async fn create(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        is_admin: bool,
    ) -> Result<entity::board_user::Model, DbErr> {
        entity::board_user::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            user_id: ActiveValue::Set(user_id),
            is_admin: ActiveValue::Set(is_admin),
        }
        .insert(self.db)
        .await
    }
}
