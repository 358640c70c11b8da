pub mod auth;
pub mod client_service;
pub mod document_service;
pub mod regulatory_service;
pub mod report_service;
pub mod user_service;
pub mod vessel_service;
