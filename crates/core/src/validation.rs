//! Field validation for people records.
//!
//! Nothing is enforced by default. Presence and length checks are switched
//! on through [`FieldRules`]; the only unconditional check is that a
//! non-blank date of birth parses as an ISO-8601 calendar date.

use std::fmt;

use crate::error::CoreError;
use crate::types::Date;

/// Date format produced by `<input type="date">` and stored in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configurable constraints applied to submitted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// Reject records without a name.
    pub require_name: bool,
    /// Maximum name length in characters.
    pub max_name_len: Option<usize>,
    /// Maximum biography length in characters.
    pub max_bio_len: Option<usize>,
}

/// A submitted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Dob,
    Bio,
}

impl Field {
    /// Label shown next to the input and at the start of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Dob => "Dob",
            Field::Bio => "Bio",
        }
    }
}

/// A single rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.label(), self.message)
    }
}

/// Validated, typed values ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: Option<String>,
    pub dob: Option<Date>,
    pub bio: Option<String>,
}

/// Treat blank form values as absent.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Parse a date of birth in [`DATE_FORMAT`]. Blank input yields `Ok(None)`.
pub fn parse_dob(raw: &str) -> Result<Option<Date>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldError::new(Field::Dob, "is not a valid date (expected YYYY-MM-DD)"))
}

/// Apply the configured presence and length rules to already-typed values.
pub fn check_rules(
    rules: &FieldRules,
    name: Option<&str>,
    bio: Option<&str>,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if rules.require_name && !name.is_some_and(|n| !n.trim().is_empty()) {
        errors.push(FieldError::new(Field::Name, "can't be blank"));
    }
    if let (Some(max), Some(name)) = (rules.max_name_len, name) {
        if name.chars().count() > max {
            errors.push(FieldError::new(
                Field::Name,
                format!("is too long (maximum is {max} characters)"),
            ));
        }
    }
    if let (Some(max), Some(bio)) = (rules.max_bio_len, bio) {
        if bio.chars().count() > max {
            errors.push(FieldError::new(
                Field::Bio,
                format!("is too long (maximum is {max} characters)"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate raw form strings, collecting every error rather than stopping
/// at the first one.
pub fn validate_person(
    rules: &FieldRules,
    name: &str,
    dob: &str,
    bio: &str,
) -> Result<PersonFields, Vec<FieldError>> {
    let name = normalize(name);
    let bio = normalize(bio);

    let mut errors = Vec::new();
    let dob = match parse_dob(dob) {
        Ok(dob) => dob,
        Err(e) => {
            errors.push(e);
            None
        }
    };
    if let Err(rule_errors) = check_rules(rules, name.as_deref(), bio.as_deref()) {
        errors.extend(rule_errors);
    }

    if errors.is_empty() {
        Ok(PersonFields { name, dob, bio })
    } else {
        errors.sort_by_key(|e| e.field as u8);
        Err(errors)
    }
}

/// Collapse field errors into a single [`CoreError::Validation`].
pub fn into_core_error(errors: &[FieldError]) -> CoreError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    CoreError::Validation(joined)
}
