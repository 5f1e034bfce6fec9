//! Person entity model and DTOs, shared by the `actors` and `directors`
//! tables.

use filmcrew_core::types::{Date, DbId, Timestamp};
use filmcrew_core::validation::PersonFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from either people table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: Option<String>,
    pub dob: Option<Date>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    pub name: Option<String>,
    pub dob: Option<Date>,
    pub bio: Option<String>,
}

/// DTO for updating a person. Replaces all three mutable fields; an absent
/// field clears the column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub dob: Option<Date>,
    pub bio: Option<String>,
}

impl From<PersonFields> for CreatePerson {
    fn from(fields: PersonFields) -> Self {
        Self {
            name: fields.name,
            dob: fields.dob,
            bio: fields.bio,
        }
    }
}

impl From<PersonFields> for UpdatePerson {
    fn from(fields: PersonFields) -> Self {
        Self {
            name: fields.name,
            dob: fields.dob,
            bio: fields.bio,
        }
    }
}
