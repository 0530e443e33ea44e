pub mod admin;
pub mod common;
pub mod staff;
pub mod students;
