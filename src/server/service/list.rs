use std::time::Duration;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::list::ListRepository,
    error::{
        store::{ReadError, WriteError},
        AppError,
    },
    model::list::{CreateListParam, List},
    util::timeout::within,
};

pub struct ListService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Creates a list on an existing board. Single insert, no transaction.
    pub async fn create(&self, param: CreateListParam) -> Result<List, AppError> {
        let list = within::<_, WriteError, _>(
            self.timeout,
            ListRepository::new(self.db).create(param),
        )
        .await?;

        tracing::info!("Created list {} on board {}", list.id, list.board_id);

        Ok(list)
    }

    pub async fn get_by_board(&self, board_id: Uuid) -> Result<Vec<List>, AppError> {
        let lists = within::<_, ReadError, _>(
            self.timeout,
            ListRepository::new(self.db).get_by_board(board_id),
        )
        .await?;

        Ok(lists)
    }
}
