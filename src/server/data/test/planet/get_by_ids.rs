use super::*;

/// Tests fetching several planets at once, skipping ids with no row.
///
/// Expected: Ok with only the planets that exist
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    factory::create_planet(db).await?;

    let planets = PlanetRepository::new(db)
        .get_by_ids(vec![first.id, second.id, 999])
        .await?;

    let mut ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty id list does not hit the database.
///
/// Expected: Ok with an empty vector, even without a planet table
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_by_ids(Vec::new()).await?;

    assert!(planets.is_empty());

    Ok(())
}
