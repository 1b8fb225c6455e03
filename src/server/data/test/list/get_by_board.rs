use super::*;

/// Tests that only the lists of the requested board are returned.
///
/// Expected: Ok with the board's lists ordered by name
#[tokio::test]
async fn returns_lists_of_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db, user.id).await?;
    let other = factory::create_board(db, user.id).await?;
    factory::list::ListFactory::new(db, board.id)
        .name("Review")
        .build()
        .await?;
    factory::list::ListFactory::new(db, board.id)
        .name("Backlog")
        .build()
        .await?;
    factory::create_list(db, other.id).await?;

    let lists = ListRepository::new(db).get_by_board(board.id).await?;

    let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Backlog", "Review"]);
    assert!(lists.iter().all(|l| l.board_id == board.id));

    Ok(())
}

/// Tests listing for a board that does not exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lists = ListRepository::new(db).get_by_board(Uuid::new_v4()).await?;

    assert!(lists.is_empty());

    Ok(())
}
