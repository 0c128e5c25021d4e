use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some) with matching id and name
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    let user = user.expect("user should exist");
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Alice");

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999).await?;

    assert!(user.is_none());

    Ok(())
}
