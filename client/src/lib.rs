pub mod client_api;
pub mod patient_client;

pub use client_api::{ClientError, PatientApi};
pub use patient_client::HttpPatientClient;
pub use patient_service::patient::PatientRecord;
