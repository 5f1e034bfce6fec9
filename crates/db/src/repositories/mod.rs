pub mod person_repo;

pub use person_repo::PersonRepo;
