use super::*;

/// Tests creating a group with teachers.
///
/// Verifies that the repository stores the group row together with its teacher
/// assignments and returns the hydrated group.
///
/// Expected: Ok with location, status and teachers attached
#[tokio::test]
async fn creates_group_with_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;
    let first = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;
    let second = factory::user::create_user_with_role(db, "teacher", Some(location.id)).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(GroupRecord {
            name: "Alpha".to_string(),
            location_id: location.id,
            status_id: status.id,
            teacher_ids: vec![second.id, first.id],
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 2, 1),
            finish_date: None,
        })
        .await?;

    assert_eq!(group.name, "Alpha");
    assert_eq!(group.location.id, location.id);
    assert_eq!(group.status.id, status.id);
    assert_eq!(group.start_date, chrono::NaiveDate::from_ymd_opt(2026, 2, 1));
    assert_eq!(group.student_count, 0);

    let teacher_ids: Vec<i32> = group.teachers.iter().map(|t| t.id).collect();
    assert_eq!(teacher_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that the unique index rejects a second group with the same name.
///
/// Expected: Err with a unique constraint violation and no partial group stored
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, status, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let repo = GroupRepository::new(db);
    let result = repo
        .create(GroupRecord {
            name: group.name.clone(),
            location_id: location.id,
            status_id: status.id,
            teacher_ids: vec![],
            start_date: None,
            finish_date: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let groups = entity::prelude::StudentGroup::find().all(db).await?;
    assert_eq!(groups.len(), 1);

    Ok(())
}

/// Tests that a failing teacher assignment rolls back the group row.
///
/// Verifies that when a teacher ID references no user the whole creation is
/// rolled back.
///
/// Expected: Err and no group stored
#[tokio::test]
async fn rolls_back_when_teacher_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let status = factory::create_status(db).await?;

    let repo = GroupRepository::new(db);
    let result = repo
        .create(GroupRecord {
            name: "Orphan".to_string(),
            location_id: location.id,
            status_id: status.id,
            teacher_ids: vec![9999],
            start_date: None,
            finish_date: None,
        })
        .await;

    assert!(result.is_err());
    assert!(repo.find_id_by_name("Orphan").await?.is_none());

    Ok(())
}
