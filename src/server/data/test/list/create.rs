use super::*;

/// Tests creating a list on an existing board.
///
/// Expected: Ok with list created
#[tokio::test]
async fn creates_list_on_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db, user.id).await?;

    let list = ListRepository::new(db)
        .create(CreateListParam {
            name: "Backlog".to_string(),
            board_id: board.id,
        })
        .await?;

    assert_eq!(list.name, "Backlog");
    assert_eq!(list.board_id, board.id);

    Ok(())
}

/// Tests that a list referencing an unknown board is rejected.
///
/// Expected: Err and no list persisted
#[tokio::test]
async fn fails_for_unknown_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListRepository::new(db)
        .create(CreateListParam {
            name: "Backlog".to_string(),
            board_id: Uuid::new_v4(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::List::find().count(db).await?, 0);

    Ok(())
}
