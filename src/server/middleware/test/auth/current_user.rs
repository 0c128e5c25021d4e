use super::*;

/// Tests resolving the caller of an authenticated session.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_some_for_authenticated_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Alice")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let caller = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(caller.map(|u| u.name), Some("Alice".to_string()));

    Ok(())
}

/// Tests resolving the caller of an anonymous session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let caller = AuthGuard::new(db, session).current_user().await?;

    assert!(caller.is_none());

    Ok(())
}

/// Tests that a stale session is treated as anonymous.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(77).await?;

    let caller = AuthGuard::new(db, session).current_user().await?;

    assert!(caller.is_none());

    Ok(())
}

/// Tests that clearing the session logs the caller out.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn returns_none_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    let caller = AuthGuard::new(db, session).current_user().await?;

    assert!(caller.is_none());

    Ok(())
}
