//! Student domain models and parameters.

use crate::{
    model::student::{EditStudentDto, StudentDto, StudentFormDto, StudentPayloadDto},
    server::{
        error::validation::{StudentField, ValidationError},
        model::reference::{EnglishLevel, Expert},
    },
};

/// Student enrolled in exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub first_name: String,
    pub last_name: String,
    pub english_level: EnglishLevel,
    /// Expert who approved the student's entry test.
    pub expert: Expert,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

impl Student {
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            group_id: self.group_id,
            group_name: self.group_name,
            first_name: self.first_name,
            last_name: self.last_name,
            english_level: self.english_level.into_dto(),
            test_approved_by_expert: self.expert.into_dto(),
            entry_score: self.entry_score,
            incoming_test: self.incoming_test,
        }
    }
}

/// Student payload as received from the client; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentParams {
    /// Set when updating an existing student.
    pub id: Option<i32>,
    pub group_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub english_level_id: Option<i32>,
    pub expert_id: Option<i32>,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

impl StudentParams {
    pub fn from_dto(dto: StudentPayloadDto) -> Self {
        Self {
            id: dto.id,
            group_id: dto.group_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            english_level_id: dto.english_level_id,
            expert_id: dto.expert_id,
            entry_score: dto.entry_score,
            incoming_test: dto.incoming_test,
        }
    }

    /// Builds the row to persist for the given group.
    ///
    /// Mandatory fields are checked in order (first name, last name, English level,
    /// expert) and the first missing one is reported.
    ///
    /// # Returns
    /// - `Ok(StudentRecord)` - All mandatory fields are present
    /// - `Err(ValidationError::MissingStudentField(_))` - First missing mandatory field
    pub fn into_record(self, group_id: i32) -> Result<StudentRecord, ValidationError> {
        let first_name = self
            .first_name
            .ok_or(ValidationError::MissingStudentField(StudentField::FirstName))?;
        let last_name = self
            .last_name
            .ok_or(ValidationError::MissingStudentField(StudentField::LastName))?;
        let english_level_id = self
            .english_level_id
            .ok_or(ValidationError::MissingStudentField(StudentField::EnglishLevel))?;
        let expert_id = self
            .expert_id
            .ok_or(ValidationError::MissingStudentField(StudentField::Expert))?;

        Ok(StudentRecord {
            group_id,
            first_name,
            last_name,
            english_level_id,
            expert_id,
            entry_score: self.entry_score,
            incoming_test: self.incoming_test,
        })
    }
}

/// Column values of a student row.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub group_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub english_level_id: i32,
    pub expert_id: i32,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

/// Flat student representation referencing group, level and expert by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub id: Option<i32>,
    pub group: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub english_level: Option<String>,
    pub expert: Option<String>,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

impl StudentForm {
    pub fn from_student(student: Student) -> Self {
        Self {
            id: Some(student.id),
            group: Some(student.group_name),
            first_name: Some(student.first_name),
            last_name: Some(student.last_name),
            english_level: Some(student.english_level.name),
            expert: Some(student.expert.expert_name),
            entry_score: student.entry_score,
            incoming_test: student.incoming_test,
        }
    }

    pub fn from_dto(dto: StudentFormDto) -> Self {
        Self {
            id: dto.id,
            group: dto.group,
            first_name: dto.first_name,
            last_name: dto.last_name,
            english_level: dto.english_level,
            expert: dto.expert,
            entry_score: dto.entry_score,
            incoming_test: dto.incoming_test,
        }
    }

    pub fn into_dto(self) -> StudentFormDto {
        StudentFormDto {
            id: self.id,
            group: self.group,
            first_name: self.first_name,
            last_name: self.last_name,
            english_level: self.english_level,
            expert: self.expert,
            entry_score: self.entry_score,
            incoming_test: self.incoming_test,
        }
    }
}

/// Student form together with the names a client can choose from when editing.
#[derive(Debug, Clone, PartialEq)]
pub struct EditStudentForm {
    pub student: StudentForm,
    pub groups: Vec<String>,
    pub experts: Vec<String>,
    pub english_levels: Vec<String>,
}

impl EditStudentForm {
    pub fn into_dto(self) -> EditStudentDto {
        EditStudentDto {
            student: self.student.into_dto(),
            groups: self.groups,
            experts: self.experts,
            english_levels: self.english_levels,
        }
    }
}
