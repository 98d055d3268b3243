use crate::error::AppError;
use crate::models::Resource;
use crate::service::validation::{validate_level, validate_non_empty, validate_non_negative};
use serde::{Deserialize, Serialize};

/// A workout plan. `difficulty` is one of beginner, intermediate or advanced, checked only in strict mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub exercises: Vec<String>,
    #[serde(rename = "duration", alias = "durationMinutes", deserialize_with = "super::null_as_default")]
    pub duration_minutes: i64,
}

impl Resource for WorkoutPlan {
    const KIND: &'static str = "Workout";
    const ID_PREFIX: &'static str = "workout_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), AppError> {
        validate_non_empty("name", &self.name)?;
        validate_level("difficulty", &self.difficulty)?;
        validate_non_negative("duration", self.duration_minutes)
    }
}
