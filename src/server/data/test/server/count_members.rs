use super::*;

/// Tests counting members of several servers at once.
///
/// Expected: Ok with one entry per server that has members
#[tokio::test]
async fn counts_members_per_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::helpers::create_server_with_dependencies(db).await?;
    let second = factory::server::create_server(db, owner.id, category.id).await?;
    let lonely = factory::server::create_server(db, owner.id, category.id).await?;

    factory::server_member::create_members(db, first.id, 2).await?;
    factory::server_member::create_members(db, second.id, 5).await?;

    let repo = ServerRepository::new(db);
    let counts = repo
        .count_members(vec![first.id, second.id, lonely.id])
        .await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&5));
    assert_eq!(counts.get(&lonely.id), None);

    Ok(())
}

/// Tests that only the requested servers are counted.
///
/// Expected: Ok without entries for other servers
#[tokio::test]
async fn counts_only_requested_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, requested) =
        factory::helpers::create_server_with_dependencies(db).await?;
    let other = factory::server::create_server(db, owner.id, category.id).await?;

    factory::server_member::create_members(db, requested.id, 1).await?;
    factory::server_member::create_members(db, other.id, 1).await?;

    let repo = ServerRepository::new(db);
    let counts = repo.count_members(vec![requested.id]).await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get(&requested.id), Some(&1));

    Ok(())
}

/// Tests counting with no server ids.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let counts = repo.count_members(Vec::new()).await?;

    assert!(counts.is_empty());

    Ok(())
}
