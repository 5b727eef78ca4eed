pub mod flag;
pub mod role;
pub mod role_permission;
pub mod submission;
pub mod user;
