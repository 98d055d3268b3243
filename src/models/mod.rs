//! Entity types served by the API and the contract every stored entity satisfies.

pub mod progress;
pub mod user;
pub mod workout;

pub use progress::*;
pub use user::*;
pub use workout::*;

use crate::error::AppError;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// An entity kind that can live in a [`ResourceStore`](crate::store::ResourceStore).
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name used in client messages ("Workout not found").
    const KIND: &'static str;
    /// Prefix for sequential ids, e.g. `workout_`.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Semantic checks applied in strict validation mode only.
    fn validate(&self) -> Result<(), AppError>;
}

/// Field decoder that treats an explicit `null` like an absent field: the zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
