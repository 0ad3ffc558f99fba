use patient_service::patient::PatientRecord;
use patient_service::server::HealthStatus;
use thiserror::Error;

/// Error type for patient service clients
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Patient not found")]
    NotFound,
    #[error("Request rejected by patient service: {0}")]
    BadRequest(String),
    #[error("Unexpected status {0} from patient service")]
    Status(u16),
    #[error("Invalid patient service url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// [`PatientApi`] is the set of operations the patient service exposes over HTTP.
#[async_trait::async_trait]
pub trait PatientApi: Send + Sync + 'static {
    /// Returns every stored patient, in no particular order.
    async fn list_patients(&self) -> Result<Vec<PatientRecord>>;

    /// Looks a patient up by name, ignoring case.
    async fn get_patient(&self, name: &str) -> Result<PatientRecord>;

    /// Stores the patient, replacing any patient with the same name, and
    /// returns the record the service stored.
    async fn create_patient(&self, patient: &PatientRecord) -> Result<PatientRecord>;

    async fn health(&self) -> Result<HealthStatus>;
}
