use super::*;

/// Tests that a missing mandatory field fails the batch before anything is stored.
///
/// The second student lacks a first name, so the first must not be persisted either.
///
/// Expected: Err(MissingStudentField(FirstName)) and no students stored
#[tokio::test]
async fn missing_first_name_stores_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(location.id)).await?;

    let mut nameless = params("", level.id, expert.id);
    nameless.first_name = None;

    let result = StudentService::new(db)
        .add_students(
            vec![params("Lesya", level.id, expert.id), nameless],
            group.id,
            &coordinator.username,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MissingStudentField(
            StudentField::FirstName
        )))
    ));
    assert!(entity::prelude::Student::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that students are always added to the group in the path.
///
/// Expected: Ok with every student in the target group despite a different group in
/// the payload
#[tokio::test]
async fn assigns_students_to_target_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let other = factory::create_group(db, location.id, status.id).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;

    let mut misdirected = params("Taras", level.id, expert.id);
    misdirected.group_id = Some(other.id);

    let stored = StudentService::new(db)
        .add_students(
            vec![params("Lesya", level.id, expert.id), misdirected],
            group.id,
            &teacher.username,
        )
        .await?;

    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|s| s.group_id == group.id));
    assert_eq!(stored[1].first_name, "Taras");

    Ok(())
}

/// Tests that coordinators cannot add students to groups elsewhere.
///
/// Expected: Err(AccessDenied(CoordinatorManipulateStudent))
#[tokio::test]
async fn coordinator_of_other_location_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;
    let coordinator =
        factory::user::create_user_with_role(db, "coordinator", Some(foreign.id)).await?;

    let result = StudentService::new(db)
        .add_students(
            vec![params("Lesya", level.id, expert.id)],
            group.id,
            &coordinator.username,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(
            DenialReason::CoordinatorManipulateStudent
        )))
    ));

    Ok(())
}

/// Tests adding a student with an unknown expert.
///
/// Expected: Err(AppError::NotFound) and no students stored
#[tokio::test]
async fn unknown_expert_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let level = factory::create_english_level(db).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let result = StudentService::new(db)
        .add_students(vec![params("Lesya", level.id, 9999)], group.id, &admin.username)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(entity::prelude::Student::find().all(db).await?.is_empty());

    Ok(())
}
