//! Student management.
//!
//! Students are always written through a group: before any write the acting user is
//! checked against the student's stored group and, when a student moves, against the
//! target group as well. Batch writes are all-or-nothing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        group::GroupRepository,
        reference::{EnglishLevelRepository, ExpertRepository},
        student::StudentRepository,
    },
    error::AppError,
    model::{
        group::Group,
        student::{EditStudentForm, Student, StudentForm, StudentParams, StudentRecord},
        user::User,
    },
    service::find_actor,
    validator::{require_role, student::StudentValidator, ALL_ROLES},
};

/// Student ID requesting an empty edit form for a new student.
pub const NEW_STUDENT_ID: i32 = -1;

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a batch of students to a group.
    ///
    /// Every student is assigned to the group regardless of the group in the payload.
    /// The batch is validated completely before anything is stored.
    ///
    /// # Arguments
    /// - `students` - Students to add
    /// - `group_id` - ID of the group receiving the students
    /// - `username` - Username of the acting user
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - The stored students in payload order
    /// - `Err(AppError::NotFound)` - Group, user, English level or expert does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Coordinator of another location
    /// - `Err(AppError::ValidationErr(MissingStudentField))` - First missing mandatory field
    pub async fn add_students(
        &self,
        students: Vec<StudentParams>,
        group_id: i32,
        username: &str,
    ) -> Result<Vec<Student>, AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let group = self.find_group(group_id).await?;

        StudentValidator::check_coordinator_location_for(&actor, &group)?;

        let records = students
            .into_iter()
            .map(|student| student.into_record(group.id))
            .collect::<Result<Vec<_>, _>>()?;

        self.ensure_references_exist(&records).await?;

        let stored = StudentRepository::new(self.db).create_many(records).await?;

        tracing::info!(
            "User {} added {} students to group {}",
            username,
            stored.len(),
            group.id
        );

        Ok(stored)
    }

    /// Updates a single student identified by the payload's ID.
    pub async fn update_single_student(
        &self,
        student: StudentParams,
        username: &str,
    ) -> Result<Student, AppError> {
        let id = student.id;

        self.update_students(vec![student], username)
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Student {:?} not found", id)))
    }

    /// Updates a batch of students.
    ///
    /// Each student is re-read from the database and the acting user is checked
    /// against the stored group. A student moved to another group is checked against
    /// that group too. Missing group IDs keep the stored group.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - The updated students in payload order
    /// - `Err(AppError::BadRequest)` - A payload has no student ID
    /// - `Err(AppError::NotFound)` - A student, group, English level or expert does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Coordinator of another location
    /// - `Err(AppError::ValidationErr(MissingStudentField))` - First missing mandatory field
    pub async fn update_students(
        &self,
        students: Vec<StudentParams>,
        username: &str,
    ) -> Result<Vec<Student>, AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let repo = StudentRepository::new(self.db);

        let mut updates = Vec::with_capacity(students.len());
        for student in students {
            let id = student
                .id
                .ok_or_else(|| AppError::BadRequest("Student id is required".to_string()))?;

            let stored = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

            let stored_group = self.find_group(stored.group_id).await?;
            StudentValidator::check_coordinator_location_for(&actor, &stored_group)?;

            let target_group_id = student.group_id.unwrap_or(stored.group_id);
            if target_group_id != stored.group_id {
                let target_group = self.find_group(target_group_id).await?;
                StudentValidator::check_coordinator_location_for(&actor, &target_group)?;
            }

            updates.push((id, student.into_record(target_group_id)?));
        }

        let records: Vec<StudentRecord> = updates.iter().map(|(_, r)| r.clone()).collect();
        self.ensure_references_exist(&records).await?;

        let updated = repo.update_many(updates).await?;

        tracing::info!("User {} updated {} students", username, updated.len());

        Ok(updated)
    }

    /// Builds the edit form for a student.
    ///
    /// The ID `-1` yields an empty form for a new student. The lists of group, expert
    /// and English level names are always attached.
    ///
    /// # Returns
    /// - `Ok(EditStudentForm)` - Form with the student's current values
    /// - `Err(AppError::NotFound)` - No student with that ID
    pub async fn find_student_to_edit(
        &self,
        user: &User,
        student_id: i32,
    ) -> Result<EditStudentForm, AppError> {
        require_role(user, ALL_ROLES)?;

        let student = if student_id == NEW_STUDENT_ID {
            StudentForm::default()
        } else {
            StudentForm::from_student(self.find_student(student_id).await?)
        };

        let groups = GroupRepository::new(self.db).get_names().await?;
        let experts = ExpertRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|expert| expert.expert_name)
            .collect();
        let english_levels = EnglishLevelRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|level| level.name)
            .collect();

        Ok(EditStudentForm {
            student,
            groups,
            experts,
            english_levels,
        })
    }

    /// Gets the students of a group.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Students ordered by ID
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_students_by_group_id(
        &self,
        user: &User,
        group_id: i32,
    ) -> Result<Vec<Student>, AppError> {
        require_role(user, ALL_ROLES)?;

        let group = self.find_group(group_id).await?;

        Ok(StudentRepository::new(self.db)
            .get_by_group_id(group.id)
            .await?)
    }

    pub async fn get_all_students(&self, user: &User) -> Result<Vec<Student>, AppError> {
        require_role(user, ALL_ROLES)?;

        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_student_by_id(&self, user: &User, id: i32) -> Result<Student, AppError> {
        require_role(user, ALL_ROLES)?;

        self.find_student(id).await
    }

    /// Gets all students as flat forms referencing related rows by name.
    pub async fn get_all_student_forms(&self, user: &User) -> Result<Vec<StudentForm>, AppError> {
        require_role(user, ALL_ROLES)?;

        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(students.into_iter().map(StudentForm::from_student).collect())
    }

    /// Creates or updates a student from a form.
    ///
    /// The group, English level and expert are resolved by name. A form with an ID
    /// updates that student; otherwise a new student is created.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student
    /// - `Err(AppError::NotFound)` - A named group, English level or expert, or the
    ///   student to update, does not exist
    /// - `Err(AppError::BadRequest)` - The form names no group
    /// - `Err(AppError::AuthErr(AccessDenied))` - Coordinator of another location
    /// - `Err(AppError::ValidationErr(MissingStudentField))` - First missing mandatory field
    pub async fn save_student(&self, form: StudentForm, username: &str) -> Result<Student, AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let group_name = form
            .group
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Student group is required".to_string()))?;
        let group_id = GroupRepository::new(self.db)
            .find_id_by_name(group_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", group_name)))?;

        let english_level_id = match form.english_level.as_deref() {
            Some(name) => Some(
                EnglishLevelRepository::new(self.db)
                    .find_by_name(name)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("English level {} not found", name)))?
                    .id,
            ),
            None => None,
        };

        let expert_id = match form.expert.as_deref() {
            Some(name) => Some(
                ExpertRepository::new(self.db)
                    .find_by_name(name)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Expert {} not found", name)))?
                    .id,
            ),
            None => None,
        };

        let params = StudentParams {
            id: form.id,
            group_id: Some(group_id),
            first_name: form.first_name,
            last_name: form.last_name,
            english_level_id,
            expert_id,
            entry_score: form.entry_score,
            incoming_test: form.incoming_test,
        };

        match params.id {
            Some(_) => self.update_single_student(params, username).await,
            None => self
                .add_students(vec![params], group_id, username)
                .await?
                .pop()
                .ok_or_else(|| AppError::InternalError("Student not stored".to_string())),
        }
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(AppError::NotFound)` - No student with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Coordinator of another location
    pub async fn delete_student(&self, id: i32, username: &str) -> Result<(), AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let student = self.find_student(id).await?;
        let group = self.find_group(student.group_id).await?;

        StudentValidator::check_coordinator_location_for(&actor, &group)?;

        if !StudentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        tracing::info!("User {} deleted student {}", username, id);

        Ok(())
    }

    async fn find_student(&self, id: i32) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))
    }

    async fn find_group(&self, id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))
    }

    /// Fails with NotFound for the first English level or expert that does not exist.
    async fn ensure_references_exist(&self, records: &[StudentRecord]) -> Result<(), AppError> {
        let level_ids: Vec<i32> = records.iter().map(|r| r.english_level_id).collect();
        let existing = EnglishLevelRepository::new(self.db)
            .existing_ids(&level_ids)
            .await?;
        if let Some(missing) = level_ids.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::NotFound(format!(
                "English level {} not found",
                missing
            )));
        }

        let expert_ids: Vec<i32> = records.iter().map(|r| r.expert_id).collect();
        let existing = ExpertRepository::new(self.db)
            .existing_ids(&expert_ids)
            .await?;
        if let Some(missing) = expert_ids.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::NotFound(format!("Expert {} not found", missing)));
        }

        Ok(())
    }
}
