use super::*;

/// Tests deleting a group removes its events and teacher assignments.
///
/// Expected: Ok with group, events and assignments gone
#[tokio::test]
async fn deletes_group_with_events_and_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    factory::group::assign_teacher(db, group.id, teacher.id).await?;
    let event_type = factory::create_event_type(db).await?;
    let date_time = chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    factory::create_event(db, group.id, event_type.id, date_time).await?;

    let repo = GroupRepository::new(db);
    repo.delete(group.id).await?;

    assert!(repo.find_by_id(group.id).await?.is_none());
    assert!(entity::prelude::Event::find().all(db).await?.is_empty());
    assert!(entity::prelude::GroupTeacher::find().all(db).await?.is_empty());
    assert!(entity::prelude::User::find_by_id(teacher.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that a group with students cannot be deleted at the database level.
///
/// Expected: Err with a foreign key violation and the group kept
#[tokio::test]
async fn refuses_group_with_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _) = factory::helpers::create_student_with_dependencies(db).await?;

    let repo = GroupRepository::new(db);
    let err = repo.delete(group.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.find_by_id(group.id).await?.is_some());

    Ok(())
}
