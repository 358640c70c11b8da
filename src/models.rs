pub mod auth;
pub mod client;
pub mod document;
pub mod envelope;
pub mod regulatory;
pub mod reports;
pub mod vessel;
