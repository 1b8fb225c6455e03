use super::*;

fn assignment(card_id: Uuid, user_id: Uuid) -> AssignCardUserParam {
    AssignCardUserParam {
        card_id,
        user_id,
        is_owner: false,
    }
}

/// Tests assigning a new member to a card.
///
/// Expected: Ok with `created` set and a non-owner membership returned
#[tokio::test]
async fn assigns_new_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;

    let assignment = CardService::new(db, LIMIT)
        .assign_user(assignment(card.id, member.id))
        .await?;

    assert!(assignment.created);
    assert_eq!(assignment.member.card_id, card.id);
    assert_eq!(assignment.member.user_id, member.id);
    assert!(!assignment.member.is_owner);

    Ok(())
}

/// Tests that assigning the same pair twice succeeds without a second row.
///
/// Expected: Ok both times, `created` only on the first, identical members returned
#[tokio::test]
async fn repeated_assignment_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    let service = CardService::new(db, LIMIT);

    let first = service.assign_user(assignment(card.id, member.id)).await?;
    let second = service.assign_user(assignment(card.id, member.id)).await?;

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.member, second.member);
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 2);

    Ok(())
}

/// Tests assigning an unknown user.
///
/// Expected: Err(AppError::WriteErr) and only the owner row remains
#[tokio::test]
async fn unknown_user_is_write_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _board, _list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let result = CardService::new(db, LIMIT)
        .assign_user(assignment(card.id, Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::WriteErr(_))));
    assert_eq!(entity::prelude::CardUser::find().count(db).await?, 1);

    Ok(())
}
