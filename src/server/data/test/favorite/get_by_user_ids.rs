use super::*;

/// Tests loading favorites for several users in one call.
///
/// Expected: Ok with favorites of both users, ordered by favorite id
#[tokio::test]
async fn returns_favorites_for_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (luke, _, first) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let (leia, _, second) = factory::helpers::create_user_with_favorite_planet(db).await?;

    let favorites = FavoriteRepository::new(db)
        .get_by_user_ids(vec![luke.id, leia.id])
        .await?;

    let ids: Vec<i32> = favorites.iter().map(|f| f.favorite.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(favorites[0].favorite.user_id, luke.id);
    assert_eq!(favorites[1].favorite.user_id, leia.id);

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_favorite_planet(db).await?;

    let favorites = FavoriteRepository::new(db).get_by_user_ids(Vec::new()).await?;

    assert!(favorites.is_empty());

    Ok(())
}
