use log::debug;
use patient_service::patient::PatientRecord;
use patient_service::server::HealthStatus;
use reqwest::{Response, StatusCode, Url};

use crate::client_api::{ClientError, PatientApi, Result};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

/// [`PatientApi`] over HTTP, rooted at the service's base url.
pub struct HttpPatientClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpPatientClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(String::from(base_url)));
        }
        Ok(Self {
            base_url: parsed,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(response.text().await?)),
            other => Err(ClientError::Status(other.as_u16())),
        }
    }
}

#[async_trait::async_trait]
impl PatientApi for HttpPatientClient {
    async fn list_patients(&self) -> Result<Vec<PatientRecord>> {
        let url = self.endpoint(&["api", "patients"])?;
        debug!("GET {}", url);
        let response = Self::check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn get_patient(&self, name: &str) -> Result<PatientRecord> {
        let url = self.endpoint(&["api", "patients", name])?;
        debug!("GET {}", url);
        let response = Self::check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_patient(&self, patient: &PatientRecord) -> Result<PatientRecord> {
        let url = self.endpoint(&["api", "patients"])?;
        debug!("POST {} ({})", url, patient.name);
        let response = Self::check(self.http.post(url).json(patient).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        let response = Self::check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }
}
