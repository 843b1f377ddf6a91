use super::*;

#[tokio::test]
async fn returns_all_warriors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_warrior(db).await?;
    let second = factory::warrior::WarriorFactory::new(db)
        .species("Wookiee")
        .build()
        .await?;

    let warriors = WarriorRepository::new(db).get_all().await?;

    assert_eq!(warriors.len(), 2);
    assert_eq!(warriors[0].id, first.id);
    assert_eq!(warriors[1].id, second.id);
    assert_eq!(warriors[1].species.as_deref(), Some("Wookiee"));

    Ok(())
}
