pub mod app;
pub mod args;
pub mod config;
pub mod convert;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod services;
pub mod validator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
