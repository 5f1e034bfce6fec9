//! The two people resources (actors and directors) and their user-facing
//! wording.
//!
//! Both resources share one row shape; [`PersonKind`] selects the table,
//! the URL prefix and the labels rendered on each page.

use serde::Deserialize;

/// Which people table a request or query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    Actor,
    Director,
}

impl PersonKind {
    /// Every kind, in the order the router mounts them.
    pub const ALL: [PersonKind; 2] = [PersonKind::Actor, PersonKind::Director];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            PersonKind::Actor => "actors",
            PersonKind::Director => "directors",
        }
    }

    /// Capitalized singular label, e.g. `"Director"`.
    pub fn singular(self) -> &'static str {
        match self {
            PersonKind::Actor => "Actor",
            PersonKind::Director => "Director",
        }
    }

    /// Capitalized plural label, e.g. `"Directors"`.
    pub fn plural(self) -> &'static str {
        match self {
            PersonKind::Actor => "Actors",
            PersonKind::Director => "Directors",
        }
    }

    /// Lowercase key used to prefix HTML element ids (`director_name`).
    pub fn param_key(self) -> &'static str {
        match self {
            PersonKind::Actor => "actor",
            PersonKind::Director => "director",
        }
    }

    /// Collection path, e.g. `/directors`.
    pub fn collection_path(self) -> String {
        format!("/{}", self.table())
    }

    /// Member path, e.g. `/directors/7`.
    pub fn member_path(self, id: i64) -> String {
        format!("/{}/{id}", self.table())
    }
}

/// One-shot success message carried across a redirect as `?notice=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notice {
    Created,
    Updated,
    Destroyed,
}

impl Notice {
    /// Query-string value for this notice.
    pub fn as_str(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Destroyed => "destroyed",
        }
    }

    /// Rendered text, e.g. `"Director was successfully created."`.
    pub fn message(self, kind: PersonKind) -> String {
        format!("{} was successfully {}.", kind.singular(), self.as_str())
    }

    /// Append this notice to `path` as a query parameter.
    pub fn redirect_target(self, path: &str) -> String {
        format!("{path}?notice={}", self.as_str())
    }
}
