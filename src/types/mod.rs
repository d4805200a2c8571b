pub mod error;
pub mod kitten;
pub mod response;
pub mod token;
pub mod user;
