use super::*;

/// Tests creating a board with an existing admin.
///
/// Expected: Ok with board and admin membership persisted together
#[tokio::test]
async fn creates_board_and_admin_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let board = BoardService::new(db, LIMIT)
        .create(CreateBoardParam {
            name: "Sprint Team".to_string(),
            admin_user_id: user.id,
        })
        .await?;

    assert_eq!(board.name, "Sprint Team");
    assert_eq!(board.admin_user_id, user.id);
    let membership = entity::prelude::BoardUser::find_by_id((board.id, user.id))
        .one(db)
        .await?;
    assert!(membership.is_some_and(|m| m.is_admin));

    Ok(())
}

/// Tests that an unknown admin leaves no board behind.
///
/// Expected: Err(AppError::WriteErr) with no board and no membership rows
#[tokio::test]
async fn unknown_admin_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardService::new(db, LIMIT)
        .create(CreateBoardParam {
            name: "Sprint Team".to_string(),
            admin_user_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::WriteErr(_))));
    assert_eq!(entity::prelude::Board::find().count(db).await?, 0);
    assert_eq!(entity::prelude::BoardUser::find().count(db).await?, 0);

    Ok(())
}
