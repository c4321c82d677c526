use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::student::{StudentDto, StudentFormDto, StudentPayloadDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::student::{Student, StudentForm, StudentParams},
        service::student::StudentService,
        state::AppState,
        validator::ALL_ROLES,
    },
};

fn into_dtos(students: Vec<Student>) -> Vec<StudentDto> {
    students.into_iter().map(Student::into_dto).collect()
}

/// Get the students of a group.
///
/// # Returns
/// - `200 OK` - Students ordered by ID
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - No group with that ID
pub async fn get_group_students(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let students = StudentService::new(&state.db)
        .get_students_by_group_id(&user, group_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Add students to a group.
///
/// Every student in the body is assigned to the group in the path. The whole batch
/// is stored or nothing is.
///
/// # Access Control
/// - Teachers and admins
/// - Coordinators for groups at their own location
///
/// # Returns
/// - `201 Created` - The stored students
/// - `400 Bad Request` - A mandatory student field is missing
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Coordinator of another location
/// - `404 Not Found` - Group, English level or expert does not exist
pub async fn add_group_students(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(payload): Json<Vec<StudentPayloadDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let students = payload.into_iter().map(StudentParams::from_dto).collect();
    let stored = StudentService::new(&state.db)
        .add_students(students, group_id, &user.username)
        .await?;

    Ok((StatusCode::CREATED, Json(into_dtos(stored))))
}

pub async fn get_all_students(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let students = StudentService::new(&state.db)
        .get_all_students(&user)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Update a batch of students.
///
/// Each entry must carry the ID of the student it updates.
///
/// # Returns
/// - `200 OK` - The updated students
/// - `400 Bad Request` - Missing student ID or mandatory field
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Coordinator of another location
/// - `404 Not Found` - A student or referenced entity does not exist
pub async fn update_students(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<StudentPayloadDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let students = payload.into_iter().map(StudentParams::from_dto).collect();
    let updated = StudentService::new(&state.db)
        .update_students(students, &user.username)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(updated))))
}

pub async fn get_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let student = StudentService::new(&state.db)
        .get_student_by_id(&user, student_id)
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Update a single student.
///
/// The ID in the path takes precedence over an ID in the body.
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let params = StudentParams {
        id: Some(student_id),
        ..StudentParams::from_dto(payload)
    };
    let student = StudentService::new(&state.db)
        .update_single_student(params, &user.username)
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Coordinator of another location
/// - `404 Not Found` - No student with that ID
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    StudentService::new(&state.db)
        .delete_student(student_id, &user.username)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the edit form of a student.
///
/// The ID `-1` returns an empty form for a new student. The form always lists the
/// names of all groups, experts and English levels.
pub async fn get_student_to_edit(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let form = StudentService::new(&state.db)
        .find_student_to_edit(&user, student_id)
        .await?;

    Ok((StatusCode::OK, Json(form.into_dto())))
}

pub async fn get_student_forms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let forms: Vec<StudentFormDto> = StudentService::new(&state.db)
        .get_all_student_forms(&user)
        .await?
        .into_iter()
        .map(StudentForm::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(forms)))
}

/// Create or update a student from a form referencing related rows by name.
///
/// # Returns
/// - `200 OK` - The stored student
/// - `400 Bad Request` - Missing group or mandatory field
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - Coordinator of another location
/// - `404 Not Found` - Named group, English level or expert does not exist
pub async fn save_student_form(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StudentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let student = StudentService::new(&state.db)
        .save_student(StudentForm::from_dto(payload), &user.username)
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}
