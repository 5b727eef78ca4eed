pub mod auth;
pub mod rejection;
