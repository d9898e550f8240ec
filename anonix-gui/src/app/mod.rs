//! Console state: dialogs, toasts, the mappings grid and the pages built
//! from them.

pub mod auth;
pub mod form;
pub mod grid;
pub mod modal;
pub mod state;
pub mod toast;
pub mod tokenizer;
pub mod view;

#[cfg(test)]
pub mod fake;
