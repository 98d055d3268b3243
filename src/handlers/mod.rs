//! HTTP handlers: generic resource CRUD, the progress-by-user query, and routing fallbacks.

pub mod fallback;
pub mod progress;
pub mod resource;
