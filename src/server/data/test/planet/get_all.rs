use super::*;

/// Tests listing planets on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}

/// Tests that planets are listed in id order.
///
/// Expected: Ok with every planet, lowest id first
#[tokio::test]
async fn returns_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    let third = factory::create_planet(db).await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
