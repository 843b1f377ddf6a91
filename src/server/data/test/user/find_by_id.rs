use super::*;

#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_id(db, 1).await?;

    let user = UserRepository::new(db).find_by_id(1).await?;

    assert_eq!(user.map(|u| u.email), Some(created.email));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_id(1).await?;

    assert!(user.is_none());

    Ok(())
}
