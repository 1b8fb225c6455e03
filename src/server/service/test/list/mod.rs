use super::LIMIT;
use crate::server::{
    error::AppError, model::list::CreateListParam, service::list::ListService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

/// Tests creating a list and reading it back through the board.
///
/// Expected: Ok with the list returned for its board
#[tokio::test]
async fn creates_and_lists_by_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db, user.id).await?;
    let service = ListService::new(db, LIMIT);

    let list = service
        .create(CreateListParam {
            name: "Backlog".to_string(),
            board_id: board.id,
        })
        .await?;

    let lists = service.get_by_board(board.id).await?;

    assert_eq!(lists, vec![list]);

    Ok(())
}

/// Tests that a list for an unknown board is a write error.
///
/// Expected: Err(AppError::WriteErr) and no list row
#[tokio::test]
async fn unknown_board_is_write_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListService::new(db, LIMIT)
        .create(CreateListParam {
            name: "Backlog".to_string(),
            board_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::WriteErr(_))));
    assert_eq!(entity::prelude::List::find().count(db).await?, 0);

    Ok(())
}
