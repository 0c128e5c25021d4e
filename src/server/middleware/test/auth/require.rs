use super::*;

/// Tests requiring a user when the session holds a valid user id.
///
/// Expected: Ok(User) for the session user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests requiring a user with an empty session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests requiring a user whose record no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}
