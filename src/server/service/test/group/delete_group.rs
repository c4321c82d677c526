use super::*;

/// Tests deleting a group that still has students.
///
/// Expected: Err(ValidationError::GroupHasStudents) and the group kept
#[tokio::test]
async fn refuses_group_with_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _) = factory::helpers::create_student_with_dependencies(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let result = GroupService::new(db)
        .delete_group(group.id, &admin.username)
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => {
            assert_eq!(err, ValidationError::GroupHasStudents(group.id))
        }
        other => panic!("expected GroupHasStudents, got {:?}", other),
    }

    let user = super::super::load_user(db, admin.id).await?;
    assert!(GroupService::new(db)
        .get_group_by_id(&user, group.id)
        .await
        .is_ok());

    Ok(())
}

/// Tests who may delete an empty group.
///
/// Expected: teacher and coordinator of another location denied, home coordinator
/// succeeds
#[tokio::test]
async fn gates_deletion_by_role_and_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(home.id)).await?;
    factory::group::assign_teacher(db, group.id, teacher.id).await?;
    let alien = factory::user::create_user_with_role(db, "coordinator", Some(foreign.id)).await?;
    let coordinator = factory::user::create_user_with_role(db, "coordinator", Some(home.id)).await?;

    let service = GroupService::new(db);

    let result = service.delete_group(group.id, &teacher.username).await;
    assert!(denied(&result, DenialReason::RoleNotAllowed));

    let result = service.delete_group(group.id, &alien.username).await;
    assert!(denied(&result, DenialReason::CoordinatorManipulateGroup));

    service.delete_group(group.id, &coordinator.username).await?;

    let user = super::super::load_user(db, coordinator.id).await?;
    assert!(matches!(
        service.get_group_by_id(&user, group.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a missing group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let result = GroupService::new(db).delete_group(42, &admin.username).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
