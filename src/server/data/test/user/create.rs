use super::*;

/// Tests creating a user with an explicit id.
///
/// Expected: Ok with the requested id
#[tokio::test]
async fn creates_user_with_explicit_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            id: Some(1),
            email: "luke@rebellion.org".to_string(),
            password: "hunter2".to_string(),
            is_active: true,
        })
        .await?;

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "luke@rebellion.org");
    assert!(user.is_active);

    Ok(())
}

/// Tests creating a user with a database-assigned id.
///
/// Expected: Ok with a fresh id
#[tokio::test]
async fn creates_user_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            id: None,
            email: "leia@rebellion.org".to_string(),
            password: "alderaan".to_string(),
            is_active: false,
        })
        .await?;

    assert_ne!(user.id, existing.id);
    assert!(!user.is_active);

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            id: None,
            email: existing.email,
            password: "password".to_string(),
            is_active: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
