//! Promotional sections composed by the home page.

mod care;
pub use care::PatientCare;

mod centers;
pub use centers::CentersOfExcellence;

mod doctors;
pub use doctors::DoctorsCare;
