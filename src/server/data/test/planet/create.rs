use super::*;

/// Tests creating a planet with every field set.
///
/// Expected: Ok with the assigned id and all fields echoed back
#[tokio::test]
async fn creates_planet_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParams {
            name: "Tatooine".to_string(),
            climate: Some("arid".to_string()),
            population: Some(200_000),
        })
        .await?;

    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate.as_deref(), Some("arid"));
    assert_eq!(planet.population, Some(200_000));

    let stored = entity::prelude::Planet::find_by_id(planet.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a planet with only a name.
///
/// Expected: Ok with climate and population left empty
#[tokio::test]
async fn creates_planet_with_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParams {
            name: "Hoth".to_string(),
            climate: None,
            population: None,
        })
        .await?;

    assert_eq!(planet.name, "Hoth");
    assert!(planet.climate.is_none());
    assert!(planet.population.is_none());

    Ok(())
}

/// Tests that planet names are unique.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::PlanetFactory::new(db)
        .name("Naboo")
        .build()
        .await?;

    let result = PlanetRepository::new(db)
        .create(CreatePlanetParams {
            name: "Naboo".to_string(),
            climate: None,
            population: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
