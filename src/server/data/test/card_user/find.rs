use super::*;

/// Tests finding the owner membership created with the card.
///
/// Expected: Ok(Some) with owner flag set
#[tokio::test]
async fn finds_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let member = CardUserRepository::new(db).find(card.id, owner.id).await?;

    let member = member.unwrap();
    assert_eq!(member.card_id, card.id);
    assert_eq!(member.user_id, owner.id);
    assert!(member.is_owner);

    Ok(())
}

/// Tests looking up a pair that is not linked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let member = CardUserRepository::new(db)
        .find(card.id, Uuid::new_v4())
        .await?;

    assert!(member.is_none());

    Ok(())
}
