use super::*;

/// Tests creating a card with its owner.
///
/// Expected: Ok with card and owner membership persisted, card listed with owner name
#[tokio::test]
async fn creates_card_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _board, list) = factory::helpers::create_list_with_dependencies(db).await?;
    let service = CardService::new(db, LIMIT);

    let card = service.create(card_param(list.id, user.id)).await?;

    assert_eq!(card.owner_user_id, user.id);
    assert_eq!(card.list_id, list.id);
    let membership = entity::prelude::CardUser::find_by_id((card.id, user.id))
        .one(db)
        .await?;
    assert!(membership.is_some_and(|m| m.is_owner));

    let cards = service.get_by_list(list.id).await?;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].owner_name, user.name);

    Ok(())
}

/// Tests that an unknown list writes neither the card nor a membership.
///
/// Expected: Err(AppError::WriteErr) with empty card tables
#[tokio::test]
async fn unknown_list_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CardService::new(db, LIMIT)
        .create(card_param(Uuid::new_v4(), user.id))
        .await;

    assert!(matches!(result, Err(AppError::WriteErr(_))));
    assert_eq!(entity::prelude::Card::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an unknown owner rolls back the already inserted card.
///
/// Expected: Err(AppError::WriteErr) with empty card tables
#[tokio::test]
async fn unknown_owner_rolls_back_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _board, list) = factory::helpers::create_list_with_dependencies(db).await?;

    let result = CardService::new(db, LIMIT)
        .create(card_param(list.id, Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::WriteErr(_))));
    assert_eq!(entity::prelude::Card::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 0);

    Ok(())
}
