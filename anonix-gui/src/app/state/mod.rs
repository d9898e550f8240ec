//! The pages of the console.

pub mod admin;
pub mod login;

pub use admin::AdminPage;
pub use login::LoginPage;
