pub mod people;
pub mod people_api;
