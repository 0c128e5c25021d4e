use super::*;

/// Tests that categories come back sorted by name.
///
/// Expected: Ok with categories in alphabetical order
#[tokio::test]
async fn gets_categories_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Music", "Gaming", "Art"] {
        factory::category::CategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Gaming", "Music"]);

    Ok(())
}

/// Tests that descriptions are carried into the domain model.
///
/// Expected: Ok with description preserved
#[tokio::test]
async fn keeps_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Gaming")
        .description(Some("Games of all kinds".to_string()))
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(
        categories[0].description.as_deref(),
        Some("Games of all kinds")
    );

    Ok(())
}

/// Tests getting categories from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
