pub mod auth;
pub mod catalog;
pub mod flag;
pub mod moderation;
pub mod submission;
