use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_email(db, "han@x.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("han@x.com").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "han@x.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("chewie@x.com").await?;

    assert!(user.is_none());

    Ok(())
}
