use super::*;
use crate::server::model::group::GroupsFilter;

/// Tests listing the groups at the acting user's location.
///
/// Expected: only groups at the user's location; empty for a user without one
#[tokio::test]
async fn lists_groups_of_user_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, status, mine) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    factory::create_group(db, foreign.id, status.id).await?;

    let coordinator = factory::user::create_user_with_role(db, "coordinator", Some(home.id)).await?;
    let admin = factory::user::create_user_with_role(db, "admin", None).await?;

    let service = GroupService::new(db);

    let coordinator = super::super::load_user(db, coordinator.id).await?;
    let groups = service.get_groups_from_user_location(&coordinator).await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, mine.id);

    let admin = super::super::load_user(db, admin.id).await?;
    assert!(service.get_groups_from_user_location(&admin).await?.is_empty());
    assert_eq!(service.get_all_groups(&admin).await?.len(), 2);

    Ok(())
}

/// Tests filtering groups through the service.
///
/// Expected: Ok with the groups of the requested location
#[tokio::test]
async fn filters_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, status, _) = factory::helpers::create_group_with_dependencies(db).await?;
    let foreign = factory::create_location(db).await?;
    let theirs = factory::create_group(db, foreign.id, status.id).await?;
    let teacher = factory::user::create_user_with_role(db, "teacher", Some(home.id)).await?;
    let teacher = super::super::load_user(db, teacher.id).await?;

    let service = GroupService::new(db);

    let groups = service
        .get_groups_by_filter(
            &teacher,
            &GroupsFilter {
                location_ids: Some(vec![foreign.id]),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, theirs.id);

    let by_ids = service
        .get_groups_by_location_ids(&teacher, &[home.id, foreign.id])
        .await?;
    assert_eq!(by_ids.len(), 2);

    Ok(())
}

/// Tests reading a missing group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin", None).await?;
    let admin = super::super::load_user(db, admin.id).await?;

    let result = GroupService::new(db).get_group_by_id(&admin, 7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
