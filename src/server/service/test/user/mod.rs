use super::LIMIT;
use crate::server::{
    error::AppError, model::user::CreateUserParam, service::user::UserService,
};
use test_utils::builder::TestBuilder;

/// Tests creating a user and listing it.
///
/// Expected: Ok with the created user listed
#[tokio::test]
async fn creates_and_lists_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, LIMIT);
    let user = service
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await?;

    let users = service.get_all().await?;

    assert_eq!(users, vec![user]);

    Ok(())
}
