use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        board::{BoardRepository, BoardUserRepository},
        transaction::AtomicWriter,
    },
    error::{store::ReadError, AppError},
    model::board::{Board, CreateBoardParam},
    util::timeout::within,
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Creates a board together with its admin membership.
    ///
    /// Both rows are written in one transaction: if the admin insert fails (for example
    /// because `admin_user_id` does not exist) the board row is rolled back as well.
    pub async fn create(&self, param: CreateBoardParam) -> Result<Board, AppError> {
        let board = AtomicWriter::new(self.db, self.timeout)
            .run(move |txn| {
                Box::pin(async move {
                    let board = BoardRepository::new(txn).create(param.name).await?;
                    let admin = BoardUserRepository::new(txn)
                        .create(board.id, param.admin_user_id, true)
                        .await?;

                    Ok(Board::from_entity(board, admin))
                })
            })
            .await?;

        tracing::info!("Created board {} ({})", board.id, board.name);

        Ok(board)
    }

    /// Gets every board with its admins.
    pub async fn get_all(&self) -> Result<Vec<Board>, AppError> {
        let boards = within::<_, ReadError, _>(
            self.timeout,
            BoardRepository::new(self.db).get_all_with_admin(),
        )
        .await?;

        Ok(boards)
    }
}
