use super::*;

/// Tests creating a warrior.
///
/// Expected: Ok with species and rank stored
#[tokio::test]
async fn creates_warrior() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let warrior = WarriorRepository::new(db)
        .create(CreateWarriorParams {
            name: "Yoda".to_string(),
            species: "Unknown".to_string(),
            rank: "Grand Master".to_string(),
        })
        .await?;

    assert_eq!(warrior.name, "Yoda");
    assert_eq!(warrior.species.as_deref(), Some("Unknown"));
    assert_eq!(warrior.rank.as_deref(), Some("Grand Master"));

    let stored = entity::prelude::Warrior::find_by_id(warrior.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.rank.as_deref(), Some("Grand Master"));

    Ok(())
}
