use super::*;

/// Tests that deleting a spaceship also removes favorites pointing at it.
///
/// Expected: Ok with one row affected and no favorites left
#[tokio::test]
async fn deletes_spaceship_and_its_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let spaceship = factory::create_spaceship(db).await?;
    factory::favorite::create_spaceship_favorite(db, user.id, spaceship.id).await?;

    let result = SpaceshipRepository::new(db).delete(spaceship.id).await?;

    assert_eq!(result.rows_affected, 1);
    let favorites = entity::prelude::Favorite::find().all(db).await?;
    assert!(favorites.is_empty());

    Ok(())
}

/// Tests deleting a spaceship that does not exist.
///
/// Expected: Ok with zero rows affected
#[tokio::test]
async fn reports_zero_rows_for_missing_spaceship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SpaceshipRepository::new(db).delete(7).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
