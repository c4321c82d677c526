use super::*;

/// Tests updating a group replaces its teacher set.
///
/// Expected: Ok with new columns and only the new teachers assigned
#[tokio::test]
async fn replaces_columns_and_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;
    let other_status = factory::create_status(db).await?;
    let old_teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    let new_teacher = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;

    let group = factory::group::GroupFactory::new(db, location.id, status.id)
        .name("Before")
        .teacher(old_teacher.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(
            group.id,
            GroupRecord {
                name: "After".to_string(),
                location_id: location.id,
                status_id: other_status.id,
                teacher_ids: vec![new_teacher.id],
                start_date: None,
                finish_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 20),
            },
        )
        .await?;

    assert_eq!(updated.id, group.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.status.id, other_status.id);
    assert_eq!(updated.finish_date, chrono::NaiveDate::from_ymd_opt(2026, 12, 20));
    assert_eq!(updated.teachers.len(), 1);
    assert_eq!(updated.teachers[0].id, new_teacher.id);

    let assignments = entity::prelude::GroupTeacher::find().all(db).await?;
    assert_eq!(assignments.len(), 1);

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;

    let repo = GroupRepository::new(db);
    let result = repo
        .update(
            42,
            GroupRecord {
                name: "Ghost".to_string(),
                location_id: location.id,
                status_id: status.id,
                teacher_ids: vec![],
                start_date: None,
                finish_date: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
