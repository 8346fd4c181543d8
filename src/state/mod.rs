pub mod auth;
pub mod selection;
