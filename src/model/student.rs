use serde::{Deserialize, Serialize};

use crate::model::reference::{EnglishLevelDto, ExpertDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: i32,
    pub group_id: i32,
    pub group_name: String,
    pub first_name: String,
    pub last_name: String,
    pub english_level: EnglishLevelDto,
    pub test_approved_by_expert: ExpertDto,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

/// Student payload for add and update requests.
///
/// Fields are optional on the wire so that missing mandatory values surface as
/// validation errors with a specific message rather than as JSON parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentPayloadDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub group_id: Option<i32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub english_level_id: Option<i32>,
    #[serde(default)]
    pub expert_id: Option<i32>,
    #[serde(default)]
    pub entry_score: Option<f64>,
    #[serde(default)]
    pub incoming_test: Option<bool>,
}

/// Student as edited in forms, referencing group, expert and level by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentFormDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub english_level: Option<String>,
    #[serde(default)]
    pub expert: Option<String>,
    #[serde(default)]
    pub entry_score: Option<f64>,
    #[serde(default)]
    pub incoming_test: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditStudentDto {
    #[serde(flatten)]
    pub student: StudentFormDto,
    pub groups: Vec<String>,
    pub experts: Vec<String>,
    pub english_levels: Vec<String>,
}
