use super::*;

/// Tests that deleting a warrior removes favorites of every user pointing at it.
///
/// Expected: Ok with one row affected and both favorites gone
#[tokio::test]
async fn deletes_warrior_and_its_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let warrior = factory::create_warrior(db).await?;
    factory::favorite::create_warrior_favorite(db, luke.id, warrior.id).await?;
    factory::favorite::create_warrior_favorite(db, leia.id, warrior.id).await?;

    let result = WarriorRepository::new(db).delete(warrior.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(entity::prelude::Favorite::find().all(db).await?.is_empty());
    assert!(entity::prelude::Warrior::find_by_id(warrior.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

#[tokio::test]
async fn reports_zero_rows_for_missing_warrior() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WarriorRepository::new(db).delete(3).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
