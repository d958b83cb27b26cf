//! Request and response data transfer objects.

pub mod request;
pub mod response;
pub mod validation;

pub use validation::ValidatedJson;
