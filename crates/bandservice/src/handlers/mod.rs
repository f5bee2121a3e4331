pub mod artists;
pub mod bands;
pub mod error;
pub mod health;
pub mod persons;
