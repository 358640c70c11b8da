pub mod person_repo;
pub use person_repo::PersonRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod phone_repo;
pub use phone_repo::PhoneRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod vessel_repo;
pub use vessel_repo::VesselRepository;
pub mod organ_repo;
pub use organ_repo::OrganRepository;
pub mod process_repo;
pub use process_repo::ProcessRepository;
pub mod inspection_repo;
pub use inspection_repo::InspectionRepository;
pub mod document_repo;
pub use document_repo::DocumentRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
