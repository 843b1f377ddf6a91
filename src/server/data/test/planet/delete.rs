use super::*;

/// Tests deleting an existing planet.
///
/// Expected: Ok with one row affected and the planet gone
#[tokio::test]
async fn deletes_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let result = PlanetRepository::new(db).delete(planet.id).await?;

    assert_eq!(result.rows_affected, 1);
    let stored = entity::prelude::Planet::find_by_id(planet.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a planet that does not exist.
///
/// Expected: Ok with zero rows affected
#[tokio::test]
async fn reports_zero_rows_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanetRepository::new(db).delete(999).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}

/// Tests that deleting a planet removes the favorites pointing at it and leaves others alone.
///
/// Expected: Ok with only the unrelated favorite remaining
#[tokio::test]
async fn deletes_favorites_pointing_at_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let warrior = factory::create_warrior(db).await?;
    let other = factory::favorite::create_warrior_favorite(db, user.id, warrior.id).await?;

    PlanetRepository::new(db).delete(planet.id).await?;

    let removed = entity::prelude::Favorite::find_by_id(favorite.id).one(db).await?;
    assert!(removed.is_none());
    let kept = entity::prelude::Favorite::find_by_id(other.id).one(db).await?;
    assert!(kept.is_some());

    Ok(())
}
