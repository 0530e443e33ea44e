pub mod enums;
pub mod menu;
pub mod order;
pub mod review;
pub mod token;
pub mod user;
