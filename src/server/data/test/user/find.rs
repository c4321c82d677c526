use super::*;

/// Tests finding a user by ID together with their location.
///
/// Expected: Ok(Some) with parsed role and location
#[tokio::test]
async fn finds_user_with_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let user = factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let found = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

    assert_eq!(found.username, user.username);
    assert_eq!(found.role, Role::Coordinator);
    assert_eq!(found.location_id(), Some(location.id));

    Ok(())
}

/// Tests finding a user without a location by username.
///
/// Expected: Ok(Some) with no location, Ok(None) for an unknown username
#[tokio::test]
async fn finds_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("admin")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let admin = repo.find_by_username("admin").await?.unwrap();

    assert_eq!(admin.role, Role::Admin);
    assert!(admin.location.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests that a stored role outside the known set is reported as an error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, "janitor", None).await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests fetching several users at once.
///
/// Expected: Ok with only the users that exist
#[tokio::test]
async fn gets_users_by_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db)
        .get_by_ids(&[first.id, second.id, 9999])
        .await?;

    let mut ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
