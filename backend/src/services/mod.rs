//! Business logic services

pub mod patients;
pub mod premium;

pub use patients::PatientService;
pub use premium::PremiumService;
