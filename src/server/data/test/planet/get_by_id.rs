use super::*;

/// Tests fetching an existing planet.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn gets_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .climate("arid")
        .population(200_000)
        .build()
        .await?;

    let planet = PlanetRepository::new(db).get_by_id(created.id).await?;

    assert!(planet.is_some());
    let planet = planet.unwrap();
    assert_eq!(planet.id, created.id);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate.as_deref(), Some("arid"));
    assert_eq!(planet.population, Some(200_000));

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db).get_by_id(999).await?;

    assert!(planet.is_none());

    Ok(())
}
