pub mod database_service;
pub mod kitten;
pub mod repository;
pub mod user;
