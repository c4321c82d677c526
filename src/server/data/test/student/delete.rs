use super::*;

/// Tests deleting a student reports whether a row was removed.
///
/// Expected: true on the first delete, false on the second
#[tokio::test]
async fn reports_whether_student_existed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_dependencies(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(student.id).await?);
    assert!(!repo.delete(student.id).await?);
    assert!(repo.find_by_id(student.id).await?.is_none());

    Ok(())
}
