use crate::error::AppError;
use crate::models::Resource;
use crate::service::validation::{validate_date, validate_non_negative};
use serde::{Deserialize, Serialize};

/// One completed (or attempted) workout session.
///
/// `user_id` and `workout_id` are soft references: they are stored as given and never checked
/// against the user or workout stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub workout_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub date: String,
    #[serde(rename = "duration", alias = "durationMinutes", deserialize_with = "super::null_as_default")]
    pub duration_minutes: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub completed: bool,
}

impl Resource for ProgressRecord {
    const KIND: &'static str = "Progress";
    const ID_PREFIX: &'static str = "progress_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), AppError> {
        validate_date("date", &self.date)?;
        validate_non_negative("duration", self.duration_minutes)
    }
}
