use crate::error::AppError;
use crate::models::Resource;
use crate::service::validation::{validate_email, validate_level, validate_non_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,
    /// beginner, intermediate or advanced
    #[serde(deserialize_with = "super::null_as_default")]
    pub level: String,
}

impl Resource for UserProfile {
    const KIND: &'static str = "User";
    const ID_PREFIX: &'static str = "user_";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), AppError> {
        validate_non_empty("username", &self.username)?;
        validate_email("email", &self.email)?;
        validate_level("level", &self.level)
    }
}
