use super::*;

/// Tests inserting a batch of students.
///
/// Verifies that students come back hydrated with group name, level and expert and
/// in the order they were given.
///
/// Expected: Ok with both students in input order
#[tokio::test]
async fn inserts_batch_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let level = factory::english_level::create_english_level_named(db, "B2").await?;
    let expert = factory::expert::create_expert_named(db, "Olena").await?;

    let mut second = record(group.id, level.id, expert.id, "Taras");
    second.entry_score = Some(87.5);
    second.incoming_test = Some(true);

    let students = StudentRepository::new(db)
        .create_many(vec![record(group.id, level.id, expert.id, "Lesya"), second])
        .await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].first_name, "Lesya");
    assert_eq!(students[1].first_name, "Taras");
    assert_eq!(students[1].entry_score, Some(87.5));
    assert_eq!(students[1].incoming_test, Some(true));
    assert_eq!(students[0].group_name, group.name);
    assert_eq!(students[0].english_level.name, "B2");
    assert_eq!(students[0].expert.expert_name, "Olena");

    Ok(())
}

/// Tests that a failing row rolls back the whole batch.
///
/// Verifies that when the second record references a missing English level the
/// first record is not stored either.
///
/// Expected: Err and no students stored
#[tokio::test]
async fn rolls_back_batch_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let level = factory::create_english_level(db).await?;
    let expert = factory::create_expert(db).await?;

    let result = StudentRepository::new(db)
        .create_many(vec![
            record(group.id, level.id, expert.id, "Lesya"),
            record(group.id, 9999, expert.id, "Taras"),
        ])
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Student::find().all(db).await?.is_empty());

    Ok(())
}
