//! The student record and its create payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator};

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Request body for `POST /api/v1/students`.
///
/// Absent or `null` fields decode to their default value so that validation,
/// not decoding, reports them. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
}

impl Validate for NewStudent {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .required("email", &self.email)
            .required("age", &self.age)
            .finish()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
