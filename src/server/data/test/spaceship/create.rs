use super::*;

/// Tests creating a spaceship with model and manufacturer.
///
/// Expected: Ok with all fields echoed back
#[tokio::test]
async fn creates_spaceship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spaceship = SpaceshipRepository::new(db)
        .create(CreateSpaceshipParams {
            name: "Millennium Falcon".to_string(),
            model: Some("YT-1300".to_string()),
            manufacturer: Some("Corellian Engineering Corporation".to_string()),
        })
        .await?;

    assert_eq!(spaceship.name, "Millennium Falcon");
    assert_eq!(spaceship.model.as_deref(), Some("YT-1300"));
    assert_eq!(
        spaceship.manufacturer.as_deref(),
        Some("Corellian Engineering Corporation")
    );

    Ok(())
}

/// Tests that spaceship names are unique.
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

    let existing = factory::create_spaceship(db).await?;

    let result = SpaceshipRepository::new(db)
        .create(CreateSpaceshipParams {
            name: existing.name,
            model: None,
            manufacturer: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
