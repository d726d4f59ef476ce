pub mod auth;
pub mod configuration;
pub mod designs;
pub mod session;
