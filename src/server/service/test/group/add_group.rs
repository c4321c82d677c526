use super::*;

/// Tests that the second of two groups with the same name is rejected.
///
/// Expected: first creation succeeds, second fails with DuplicateGroupName
#[tokio::test]
async fn rejects_second_group_with_same_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::status::create_status_named(db, "forming").await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let service = GroupService::new(db);
    service
        .add_group(create_params("Alpha"), &coordinator.username)
        .await?;
    let second = service
        .add_group(create_params("Alpha"), &coordinator.username)
        .await;

    match second {
        Err(AppError::ValidationErr(err)) => {
            assert_eq!(err, ValidationError::DuplicateGroupName("Alpha".to_string()))
        }
        other => panic!("expected duplicate name, got {:?}", other),
    }

    Ok(())
}

/// Tests the defaults applied to a group created by a teacher.
///
/// Verifies that the location defaults to the teacher's, the status to the initial
/// status and that the teacher is assigned to the new group.
///
/// Expected: Ok with teacher's location, "forming" status and the teacher assigned
#[tokio::test]
async fn teacher_creates_group_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let forming = factory::status::create_status_named(db, "forming").await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    let colleague = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;

    let mut params = create_params("Alpha");
    params.teacher_ids = vec![colleague.id];

    let group = GroupService::new(db)
        .add_group(params, &teacher.username)
        .await?;

    assert_eq!(group.location.id, location.id);
    assert_eq!(group.status.id, forming.id);
    assert!(group.has_teacher(teacher.id));
    assert!(group.has_teacher(colleague.id));
    assert_eq!(group.teachers.len(), 2);

    Ok(())
}

/// Tests that teachers and coordinators cannot create groups elsewhere.
///
/// Expected: Err(AccessDenied(CreateGroupAlienLocation)) for both roles
#[tokio::test]
async fn rejects_creation_at_other_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_location(db).await?;
    let other = factory::create_location(db).await?;
    factory::status::create_status_named(db, "forming").await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(home.id)).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(home.id)).await?;
    let homeless = factory::user::create_user_with_role(db, "coordinator", None).await?;

    let service = GroupService::new(db);

    for actor in [&teacher, &coordinator] {
        let mut params = create_params(&format!("Alien {}", actor.id));
        params.location_id = Some(other.id);
        let result = service.add_group(params, &actor.username).await;
        assert!(denied(&result, DenialReason::CreateGroupAlienLocation));
    }

    let result = service
        .add_group(create_params("Nowhere"), &homeless.username)
        .await;
    assert!(denied(&result, DenialReason::CreateGroupAlienLocation));

    Ok(())
}

/// Tests that an admin may create a group anywhere but must name a location.
///
/// Expected: Ok at the given location, BadRequest without one
#[tokio::test]
async fn admin_creates_group_anywhere() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let service = GroupService::new(db);

    let mut params = create_params("Alpha");
    params.location_id = Some(location.id);
    params.status_id = Some(status.id);
    let group = service.add_group(params, &admin.username).await?;

    assert_eq!(group.location.id, location.id);
    assert_eq!(group.status.id, status.id);
    assert!(group.teachers.is_empty());

    let result = service.add_group(create_params("Beta"), &admin.username).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creation when the initial status is not configured.
///
/// Expected: Err(ValidationError::MissingGroupStatus)
#[tokio::test]
async fn fails_without_initial_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let result = GroupService::new(db)
        .add_group(create_params("Alpha"), &coordinator.username)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MissingGroupStatus))
    ));

    Ok(())
}

/// Tests that a coordinator creating at a foreign location learns nothing about names.
///
/// The name is already taken, but the location gate applies first.
///
/// Expected: Err(AccessDenied(CreateGroupAlienLocation))
#[tokio::test]
async fn location_gate_precedes_name_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_location(db).await?;
    let foreign = factory::create_location(db).await?;
    let forming = factory::status::create_status_named(db, "forming").await?;
    factory::group::GroupFactory::new(db, foreign.id, forming.id)
        .name("Alpha")
        .build()
        .await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(home.id)).await?;

    let mut params = create_params("Alpha");
    params.location_id = Some(foreign.id);

    let result = GroupService::new(db)
        .add_group(params, &coordinator.username)
        .await;

    assert!(denied(&result, DenialReason::CreateGroupAlienLocation));

    Ok(())
}
