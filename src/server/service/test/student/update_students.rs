use super::*;

/// Tests moving a student to a group at the coordinator's location.
///
/// Expected: Ok with the student in the new group
#[tokio::test]
async fn moves_student_to_other_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, from) = factory::helpers::create_group_with_dependencies(db).await?;
    let to = factory::create_group(db, location.id, status.id).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let student = factory::create_student(db, from.id, level.id, expert.id).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let mut update = params("Lesya", level.id, expert.id);
    update.id = Some(student.id);
    update.group_id = Some(to.id);

    let updated = StudentService::new(db)
        .update_single_student(update, &coordinator.username)
        .await?;

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.group_id, to.id);
    assert_eq!(updated.first_name, "Lesya");

    Ok(())
}

/// Tests that a coordinator cannot move a student into a group elsewhere.
///
/// Expected: Err(AccessDenied(CoordinatorManipulateStudent)) and the student unchanged
#[tokio::test]
async fn cannot_move_student_to_foreign_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, from) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let to = factory::create_group(db, foreign.id, status.id).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let student = factory::create_student(db, from.id, level.id, expert.id).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let mut update = params("Lesya", level.id, expert.id);
    update.id = Some(student.id);
    update.group_id = Some(to.id);

    let result = StudentService::new(db)
        .update_students(vec![update], &coordinator.username)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(
            DenialReason::CoordinatorManipulateStudent
        )))
    ));

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.group_id, from.id);

    Ok(())
}

/// Tests that the stored group is checked, not the group in the payload.
///
/// The payload claims the student is in a group at the coordinator's location while
/// it is actually stored in a group elsewhere.
///
/// Expected: Err(AccessDenied(CoordinatorManipulateStudent))
#[tokio::test]
async fn checks_stored_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, home_group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let foreign_group = factory::create_group(db, foreign.id, status.id).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let student = factory::create_student(db, foreign_group.id, level.id, expert.id).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let mut update = params("Lesya", level.id, expert.id);
    update.id = Some(student.id);
    update.group_id = Some(home_group.id);

    let result = StudentService::new(db)
        .update_students(vec![update], &coordinator.username)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(
            DenialReason::CoordinatorManipulateStudent
        )))
    ));

    Ok(())
}

/// Tests updates without a student ID.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_student_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let result = StudentService::new(db)
        .update_students(vec![params("Lesya", level.id, expert.id)], &admin.username)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a student.
///
/// Expected: Ok on the first delete, NotFound on the second
#[tokio::test]
async fn deletes_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let service = StudentService::new(db);
    service.delete_student(student.id, &admin.username).await?;

    let result = service.delete_student(student.id, &admin.username).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
