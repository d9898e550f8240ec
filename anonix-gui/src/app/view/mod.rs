pub mod admin;
pub mod grid;
pub mod login;
pub mod modal;
