//! Common types, validation rules, response envelope and errors shared across
//! `students-api` crates.

pub mod error;
pub mod protocol;
pub mod student;
pub mod validation;

pub use error::ServiceError;
pub use student::{NewStudent, Student};
pub use validation::{Validate, ValidationErrors};
