use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::group::{CreateGroupDto, GroupDto, GroupsFilterDto, UpdateGroupDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::group::{CreateGroupParams, Group, GroupsFilter, UpdateGroupParams},
        service::{group::GroupService, teacher_group::TeacherGroupService},
        state::AppState,
        validator::{ALL_ROLES, GROUP_REMOVERS, TEACHERS_ONLY},
    },
};

fn into_dtos(groups: Vec<Group>) -> Vec<GroupDto> {
    groups.into_iter().map(Group::into_dto).collect()
}

/// Get all groups.
///
/// # Access Control
/// - Teachers, coordinators and admins
///
/// # Returns
/// - `200 OK` - All groups ordered by ID
/// - `401 Unauthorized` - User not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_all_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let groups = GroupService::new(&state.db).get_all_groups(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(groups))))
}

/// Get the groups the logged-in teacher is assigned to.
///
/// # Access Control
/// - Teachers only
///
/// # Returns
/// - `200 OK` - Assigned groups
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not a teacher
pub async fn get_my_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(TEACHERS_ONLY)
        .await?;

    let groups = TeacherGroupService::new(&state.db)
        .get_all_groups_of_the_teacher(&user.username)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(groups))))
}

/// Get the groups at the logged-in user's location.
///
/// Users without a location receive an empty list.
pub async fn get_my_location_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let groups = GroupService::new(&state.db)
        .get_groups_from_user_location(&user)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(groups))))
}

/// Get a single group.
///
/// # Returns
/// - `200 OK` - The group
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - No group with that ID
pub async fn get_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let group = GroupService::new(&state.db)
        .get_group_by_id(&user, group_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Get the groups matching a filter.
///
/// Every criterion present in the body must match: location IDs, status IDs and an
/// assigned teacher.
pub async fn filter_groups(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GroupsFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let filter = GroupsFilter::from_dto(payload);
    let groups = GroupService::new(&state.db)
        .get_groups_by_filter(&user, &filter)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(groups))))
}

/// Create a new group.
///
/// # Access Control
/// - Teachers and coordinators at their own location
/// - Admins at any location
///
/// # Returns
/// - `201 Created` - The created group
/// - `400 Bad Request` - Duplicate name, missing location or no initial status
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Location not allowed for the user
/// - `404 Not Found` - Referenced location, status or teacher does not exist
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let params = CreateGroupParams::from_dto(payload);
    let group = GroupService::new(&state.db)
        .add_group(params, &user.username)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Update a group.
///
/// Fields missing from the body keep their current values.
///
/// # Access Control
/// - Teachers assigned to the group at its location while it has not graduated
/// - Coordinators of the group's location
/// - Admins
///
/// # Returns
/// - `200 OK` - The updated group
/// - `400 Bad Request` - Another group has the name
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User may not edit the group or move it to the new location
/// - `404 Not Found` - Group or a referenced entity does not exist
pub async fn update_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let params = UpdateGroupParams::from_dto(payload);
    let group = GroupService::new(&state.db)
        .update_group(group_id, params, &user.username)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group without students.
///
/// # Access Control
/// - Coordinators of the group's location
/// - Admins
///
/// # Returns
/// - `204 No Content` - Group deleted
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Role or location not allowed
/// - `404 Not Found` - No group with that ID
/// - `409 Conflict` - The group still has students
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(GROUP_REMOVERS)
        .await?;

    GroupService::new(&state.db)
        .delete_group(group_id, &user.username)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
