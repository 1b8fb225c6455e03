use super::*;

fn param(list_id: Uuid, owner_user_id: Uuid) -> CreateCardParam {
    CreateCardParam {
        title: "Deploy".to_string(),
        description: "Ship the release to production".to_string(),
        due_date: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
        list_id,
        owner_user_id,
    }
}

/// Tests inserting a card row on an existing list.
///
/// The repository only writes the card; the owner membership is the caller's job.
///
/// Expected: Ok with card created and no membership rows
#[tokio::test]
async fn creates_card_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _board, list) = factory::helpers::create_list_with_dependencies(db).await?;

    let card = CardRepository::new(db).create(&param(list.id, user.id)).await?;

    assert_eq!(card.title, "Deploy");
    assert_eq!(card.list_id, list.id);
    assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2026, 11, 30).unwrap());
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a card referencing an unknown list is rejected.
///
/// Expected: Err and no card persisted
#[tokio::test]
async fn fails_for_unknown_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CardRepository::new(db)
        .create(&param(Uuid::new_v4(), user.id))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Card::find().count(db).await?, 0);

    Ok(())
}
