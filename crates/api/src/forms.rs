//! Typed request models for HTML form submissions.

use filmcrew_core::validation::{validate_person, FieldError, FieldRules, PersonFields, DATE_FORMAT};
use filmcrew_db::models::person::Person;
use serde::Deserialize;

/// Raw url-encoded body posted by the new and edit forms.
///
/// Values are kept as submitted so a rejected form can be re-rendered
/// exactly. Missing fields deserialize as empty strings; the `_method` and
/// `commit` fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub bio: String,
}

impl PersonForm {
    /// Prefill values for the edit form.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone().unwrap_or_default(),
            dob: person
                .dob
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            bio: person.bio.clone().unwrap_or_default(),
        }
    }

    /// Parse and check the submitted values.
    pub fn validate(&self, rules: &FieldRules) -> Result<PersonFields, Vec<FieldError>> {
        validate_person(rules, &self.name, &self.dob, &self.bio)
    }
}

/// JSON body accepted by the `/api/v1` create and update endpoints.
///
/// `dob` arrives as text and goes through the same parsing and blank
/// handling as the HTML forms, so both surfaces store identical rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
}

impl PersonPayload {
    pub fn validate(&self, rules: &FieldRules) -> Result<PersonFields, Vec<FieldError>> {
        validate_person(
            rules,
            self.name.as_deref().unwrap_or_default(),
            self.dob.as_deref().unwrap_or_default(),
            self.bio.as_deref().unwrap_or_default(),
        )
    }
}
