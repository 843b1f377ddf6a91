use super::*;

/// Tests listing a user's favorites of every kind with their items resolved.
///
/// Expected: Ok with three favorites in creation order, each carrying its item
#[tokio::test]
async fn returns_favorites_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    let warrior = factory::create_warrior(db).await?;
    let spaceship = factory::create_spaceship(db).await?;
    factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    factory::favorite::create_warrior_favorite(db, user.id, warrior.id).await?;
    factory::favorite::create_spaceship_favorite(db, user.id, spaceship.id).await?;

    let favorites = FavoriteRepository::new(db).get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 3);
    match &favorites[0].item {
        Some(FavoriteItem::Planet(p)) => assert_eq!(p.name, "Tatooine"),
        other => panic!("Expected planet item, got {:?}", other),
    }
    assert!(matches!(favorites[1].item, Some(FavoriteItem::Warrior(ref w)) if w.id == warrior.id));
    assert!(
        matches!(favorites[2].item, Some(FavoriteItem::Spaceship(ref s)) if s.id == spaceship.id)
    );

    Ok(())
}

/// Tests that other users' favorites are not returned.
///
/// Expected: Ok with only the requested user's favorite
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;
    factory::helpers::create_user_with_favorite_planet(db).await?;

    let favorites = FavoriteRepository::new(db).get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].favorite.id, favorite.id);

    Ok(())
}

/// Tests listing favorites for a user that does not exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let favorites = FavoriteRepository::new(db).get_by_user_id(42).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests a favorite whose planet row is gone.
///
/// Expected: Ok with the favorite present and no item
#[tokio::test]
async fn returns_favorite_without_item_when_row_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, favorite) = factory::helpers::create_user_with_favorite_planet(db).await?;

    entity::prelude::Planet::delete_by_id(planet.id)
        .exec(db)
        .await?;

    let favorites = FavoriteRepository::new(db).get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].favorite.id, favorite.id);
    assert!(favorites[0].item.is_none());

    Ok(())
}

/// Tests reading a row whose type disagrees with its reference.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_mismatched_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::favorite::FavoriteFactory::new(db, user.id)
        .planet(planet.id)
        .favorite_type(FavoriteType::Warrior)
        .build()
        .await?;

    let result = FavoriteRepository::new(db).get_by_user_id(user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
