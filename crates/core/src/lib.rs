//! Domain types shared by the database and HTTP layers.

pub mod error;
pub mod people;
pub mod types;
pub mod validation;
