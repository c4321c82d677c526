use super::*;

/// Tests filtering groups by location, status and teacher.
///
/// Creates four groups spread across two locations and two statuses with one
/// teacher assigned to two of them, then checks each criterion alone and combined.
///
/// Expected: Ok with exactly the groups matching every criterion set
#[tokio::test]
async fn combines_criteria() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kyiv = factory::create_location(db).await?;
    let lviv = factory::create_location(db).await?;
    let active = factory::create_status(db).await?;
    let forming = factory::create_status(db).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(kyiv.id)).await?;

    let a = factory::group::GroupFactory::new(db, kyiv.id, active.id)
        .teacher(teacher.id)
        .build()
        .await?;
    let b = factory::group::GroupFactory::new(db, kyiv.id, forming.id)
        .build()
        .await?;
    let c = factory::group::GroupFactory::new(db, lviv.id, active.id)
        .teacher(teacher.id)
        .build()
        .await?;
    let d = factory::group::GroupFactory::new(db, lviv.id, forming.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let ids = |groups: Vec<crate::server::model::group::Group>| {
        groups.into_iter().map(|g| g.id).collect::<Vec<_>>()
    };

    let all = repo.get_by_filter(&GroupsFilter::default()).await?;
    assert_eq!(ids(all), vec![a.id, b.id, c.id, d.id]);

    let by_location = repo
        .get_by_filter(&GroupsFilter {
            location_ids: Some(vec![lviv.id]),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(by_location), vec![c.id, d.id]);

    let by_status = repo
        .get_by_filter(&GroupsFilter {
            status_ids: Some(vec![forming.id]),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(by_status), vec![b.id, d.id]);

    let by_teacher = repo
        .get_by_filter(&GroupsFilter {
            teacher_id: Some(teacher.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(by_teacher), vec![a.id, c.id]);

    let combined = repo
        .get_by_filter(&GroupsFilter {
            location_ids: Some(vec![kyiv.id]),
            status_ids: Some(vec![active.id]),
            teacher_id: Some(teacher.id),
        })
        .await?;
    assert_eq!(ids(combined), vec![a.id]);

    assert_eq!(ids(repo.get_by_teacher(teacher.id).await?), vec![a.id, c.id]);
    assert_eq!(ids(repo.get_by_location_ids(&[kyiv.id]).await?), vec![a.id, b.id]);

    Ok(())
}
