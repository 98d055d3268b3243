//! Request-side services shared by the resource controllers.

pub mod validation;
pub use validation::RequestValidator;
