use super::*;

/// Tests assigning a user who is not yet linked to the card.
///
/// Expected: Ok(true) with one new membership row
#[tokio::test]
async fn inserts_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;

    let created = CardUserRepository::new(db)
        .assign_if_absent(assignment(card.id, member.id))
        .await?;

    assert!(created);
    let row = entity::prelude::CardUser::find_by_id((card.id, member.id))
        .one(db)
        .await?;
    assert!(row.is_some_and(|r| !r.is_owner));

    Ok(())
}

/// Tests that repeating an assignment is a no-op.
///
/// Expected: Ok(false) on the second call and still exactly one row for the pair
#[tokio::test]
async fn repeated_assignment_keeps_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    let repo = CardUserRepository::new(db);

    assert!(repo.assign_if_absent(assignment(card.id, member.id)).await?);
    assert!(!repo.assign_if_absent(assignment(card.id, member.id)).await?);

    // owner + member
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 2);

    Ok(())
}

/// Tests that assigning the owner again leaves the owner flag untouched.
///
/// Expected: Ok(false) and the existing row still marked as owner
#[tokio::test]
async fn keeps_existing_owner_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let created = CardUserRepository::new(db)
        .assign_if_absent(assignment(card.id, owner.id))
        .await?;

    assert!(!created);
    let row = entity::prelude::CardUser::find_by_id((card.id, owner.id))
        .one(db)
        .await?;
    assert!(row.is_some_and(|r| r.is_owner));

    Ok(())
}

/// Tests two overlapping assignments of the same pair.
///
/// Exactly one of them may report the insert.
///
/// Expected: one Ok(true), one Ok(false), a single row for the pair
#[tokio::test]
async fn concurrent_assignments_insert_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    let repo = CardUserRepository::new(db);

    let (first, second) = tokio::join!(
        repo.assign_if_absent(assignment(card.id, member.id)),
        repo.assign_if_absent(assignment(card.id, member.id)),
    );

    assert!(first? ^ second?);
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 2);

    Ok(())
}

/// Tests that an unknown card is rejected by the foreign key.
///
/// Expected: Err and no row written
#[tokio::test]
async fn fails_for_unknown_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CardUserRepository::new(db)
        .assign_if_absent(assignment(Uuid::new_v4(), user.id))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 0);

    Ok(())
}
