use super::*;

/// Tests that an assigned teacher cannot edit a group at another location.
///
/// The teacher is assigned to a group in a foreign location whose status is active,
/// so the location rule is the one that applies.
///
/// Expected: Err(AccessDenied(TeacherEditAlienLocation))
#[tokio::test]
async fn assigned_teacher_at_foreign_location_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_location(db).await?;
    let foreign = factory::create_location(db).await?;
    let active = factory::status::create_status_named(db, "active").await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(home.id)).await?;
    let group = factory::group::GroupFactory::new(db, foreign.id, active.id)
        .teacher(teacher.id)
        .build()
        .await?;

    let result = GroupService::new(db)
        .update_group(
            group.id,
            UpdateGroupParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
            &teacher.username,
        )
        .await;

    assert!(denied(&result, DenialReason::TeacherEditAlienLocation));

    Ok(())
}

/// Tests that a teacher may not edit a graduated group but may graduate one.
///
/// The edit rule looks at the persisted status, so moving a group into the graduated
/// status is allowed while any edit afterwards is denied.
///
/// Expected: first update Ok, second Err(AccessDenied(TeacherEditGroupGraduated))
#[tokio::test]
async fn teacher_cannot_edit_after_graduation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let active = factory::status::create_status_named(db, "active").await?;
    let graduated = factory::status::create_status_named(db, "graduated").await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    let group = factory::group::GroupFactory::new(db, location.id, active.id)
        .teacher(teacher.id)
        .build()
        .await?;

    let service = GroupService::new(db);
    let updated = service
        .update_group(
            group.id,
            UpdateGroupParams {
                status_id: Some(graduated.id),
                ..Default::default()
            },
            &teacher.username,
        )
        .await?;
    assert_eq!(updated.status.id, graduated.id);

    let result = service
        .update_group(
            group.id,
            UpdateGroupParams {
                status_id: Some(active.id),
                ..Default::default()
            },
            &teacher.username,
        )
        .await;
    assert!(denied(&result, DenialReason::TeacherEditGroupGraduated));

    Ok(())
}

/// Tests that a coordinator cannot move their group to another location.
///
/// Expected: Err(AccessDenied(CoordinatorEditAlienLocation)) and the group unchanged
#[tokio::test]
async fn coordinator_cannot_relocate_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(home.id)).await?;

    let service = GroupService::new(db);
    let result = service
        .update_group(
            group.id,
            UpdateGroupParams {
                location_id: Some(foreign.id),
                ..Default::default()
            },
            &coordinator.username,
        )
        .await;

    assert!(denied(&result, DenialReason::CoordinatorEditAlienLocation));

    let user = super::super::load_user(db, coordinator.id).await?;
    let stored = service.get_group_by_id(&user, group.id).await?;
    assert_eq!(stored.location.id, home.id);

    Ok(())
}

/// Tests a coordinator's partial update of a group at their location.
///
/// Expected: Ok with the new name and teachers, other fields kept
#[tokio::test]
async fn coordinator_updates_name_and_teachers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;

    let updated = GroupService::new(db)
        .update_group(
            group.id,
            UpdateGroupParams {
                name: Some("Renamed".to_string()),
                teacher_ids: Some(vec![teacher.id]),
                ..Default::default()
            },
            &coordinator.username,
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status.id, status.id);
    assert_eq!(updated.location.id, location.id);
    assert!(updated.has_teacher(teacher.id));

    Ok(())
}

/// Tests renaming a group to another group's name.
///
/// Expected: Err(ValidationError::DuplicateGroupName)
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;
    let alpha = factory::group::GroupFactory::new(db, location.id, status.id)
        .name("Alpha")
        .build()
        .await?;
    factory::group::GroupFactory::new(db, location.id, status.id)
        .name("Beta")
        .build()
        .await?;

    let service = GroupService::new(db);

    let same = service
        .update_group(
            alpha.id,
            UpdateGroupParams {
                name: Some("Alpha".to_string()),
                ..Default::default()
            },
            &admin.username,
        )
        .await?;
    assert_eq!(same.name, "Alpha");

    let result = service
        .update_group(
            alpha.id,
            UpdateGroupParams {
                name: Some("Beta".to_string()),
                ..Default::default()
            },
            &admin.username,
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateGroupName(_)))
    ));

    Ok(())
}

/// Tests that the edit gate runs before any referenced ID is resolved.
///
/// The teacher is not assigned to the group and names a location that does not
/// exist, so a lookup ahead of the gate would surface as NotFound.
///
/// Expected: Err(AccessDenied(TeacherEditNotAssigned))
#[tokio::test]
async fn unassigned_teacher_is_denied_before_references_are_resolved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let active = factory::status::create_status_named(db, "active").await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    let group = factory::group::GroupFactory::new(db, location.id, active.id)
        .build()
        .await?;

    let result = GroupService::new(db)
        .update_group(
            group.id,
            UpdateGroupParams {
                location_id: Some(9999),
                ..Default::default()
            },
            &teacher.username,
        )
        .await;

    assert!(denied(&result, DenialReason::TeacherEditNotAssigned));

    Ok(())
}
