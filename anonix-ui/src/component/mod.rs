pub mod button;
pub mod form;
pub mod notification;
pub mod table;
pub mod text;
pub mod toast;
