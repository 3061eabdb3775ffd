use super::*;

/// Tests creating a new user with only credentials.
///
/// Verifies that optional profile fields are stored as NULL rather than defaulted
/// and that the password is persisted on the row.
///
/// Expected: Ok with user created and optional fields absent
#[tokio::test]
async fn creates_user_with_credentials_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("a@x.com")).await?;

    assert_eq!(user.email, "a@x.com");
    assert!(!user.is_active);
    assert!(user.full_name.is_none());
    assert!(user.address.is_none());
    assert!(user.country.is_none());

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "secret");

    Ok(())
}

/// Tests creating a user with every profile field set.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_user_with_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            is_active: true,
            full_name: Some("Leia Organa".to_string()),
            address: Some("Royal Palace".to_string()),
            country: Some("Alderaan".to_string()),
            ..create_param("leia@x.com")
        })
        .await?;

    assert!(user.is_active);
    assert_eq!(user.full_name.as_deref(), Some("Leia Organa"));
    assert_eq!(user.address.as_deref(), Some("Royal Palace"));
    assert_eq!(user.country.as_deref(), Some("Alderaan"));

    Ok(())
}

/// Tests inserting an email that is already stored, bypassing the service pre-query.
///
/// Expected: the unique column rejects the insert and the error maps to Conflict
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("a@x.com")).await?;
    let err = repo.create(create_param("a@x.com")).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert!(matches!(
        AppError::conflict_on_unique(err, "Duplicate"),
        AppError::Conflict(_)
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
