use super::*;

/// Tests that a board created through the service is listed with its admin.
///
/// Expected: Ok with one board
#[tokio::test]
async fn lists_created_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = BoardService::new(db, LIMIT);
    let created = service
        .create(CreateBoardParam {
            name: "Sprint Team".to_string(),
            admin_user_id: user.id,
        })
        .await?;

    let boards = service.get_all().await?;

    assert_eq!(boards, vec![created]);

    Ok(())
}

/// Tests that a failing read is reported as a read error.
///
/// The board tables are missing, so the query fails.
///
/// Expected: Err(AppError::ReadErr)
#[tokio::test]
async fn reports_read_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardService::new(db, LIMIT).get_all().await;

    assert!(matches!(result, Err(AppError::ReadErr(_))));

    Ok(())
}
