use super::*;

/// Tests creating a planet favorite.
///
/// Expected: Ok with the tag and only the planet reference stored
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));

    let stored = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.r#type, FavoriteType::Planet);
    assert_eq!(stored.planet_id, Some(planet.id));
    assert!(stored.spaceship_id.is_none());
    assert!(stored.warrior_id.is_none());

    Ok(())
}

/// Tests creating a warrior favorite.
///
/// Expected: Ok with only the warrior reference stored
#[tokio::test]
async fn creates_warrior_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let warrior = factory::create_warrior(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(user.id, FavoriteTarget::Warrior(warrior.id))
        .await?;

    let stored = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.r#type, FavoriteType::Warrior);
    assert_eq!(stored.warrior_id, Some(warrior.id));
    assert!(stored.planet_id.is_none());

    Ok(())
}

/// Tests creating a favorite for an item that does not exist.
///
/// Expected: Ok with the dangling reference stored as given
#[tokio::test]
async fn creates_favorite_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(user.id, FavoriteTarget::Spaceship(999))
        .await?;

    assert_eq!(favorite.target, FavoriteTarget::Spaceship(999));
    let stored = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.spaceship_id, Some(999));

    Ok(())
}

/// Tests that the owner must exist.
///
/// Expected: Err from the user foreign key
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let result = FavoriteRepository::new(db)
        .create(42, FavoriteTarget::Planet(planet.id))
        .await;

    assert!(result.is_err());

    Ok(())
}
