use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository generates an id and stores the name and email as given.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@example.com");
    assert!(!user.id.is_nil());

    Ok(())
}

/// Tests that two users never share an id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
