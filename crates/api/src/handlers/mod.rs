pub mod admin;
pub mod notification;
