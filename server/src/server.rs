extern crate log;
use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};
use rocket::data::{ByteUnit, Data, Limits, ToByteUnit};
use rocket::figment::Figment;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{get, post, routes, Build, Rocket, State};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use crate::cors::{self, Cors};
use crate::error::{ApiError, INVALID_BODY, MISSING_FIELDS};
use crate::patient::{decode_first, PatientRecord};
use crate::store::PatientStore;

pub const DEFAULT_PORT: u16 = 8080;
pub const HEALTHY: &str = "healthy";
pub const DEFAULT_JSON_LIMIT_MIB: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthStatus {
    pub status: String,
    pub time: String,
}

#[get("/health")]
fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: String::from(HEALTHY),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[get("/api/patients")]
async fn list_patients(store: &State<Arc<PatientStore>>) -> Json<Vec<PatientRecord>> {
    let patients = store.list().await;
    debug!("Listing {} patients", patients.len());
    Json(patients)
}

#[get("/api/patients/<name>")]
async fn get_patient(
    name: &str,
    store: &State<Arc<PatientStore>>,
) -> Result<Json<PatientRecord>, ApiError> {
    match store.get(name).await {
        Some(patient) => {
            debug!("Found patient {}", name);
            Ok(Json(patient))
        }
        None => {
            debug!("No patient named {}", name);
            Err(ApiError::NotFound)
        }
    }
}

/// Only the first JSON value in the body is decoded; anything after it is ignored.
#[post("/api/patients", data = "<body>")]
async fn create_patient(
    body: Data<'_>,
    limits: &Limits,
    store: &State<Arc<PatientStore>>,
) -> Result<(Status, Json<PatientRecord>), ApiError> {
    let limit = limits.get("json").unwrap_or(Limits::JSON);
    let text = match body.open(limit).into_string().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read patient body: {}", e);
            return Err(ApiError::BadRequest(INVALID_BODY));
        }
    };
    let patient = match decode_first(&text) {
        Ok(patient) => patient,
        Err(e) if !text.is_complete() => {
            warn!("Patient body exceeds the {} json limit: {}", limit, e);
            return Err(ApiError::BadRequest(INVALID_BODY));
        }
        Err(e) => {
            warn!("Rejected patient body: {}", e);
            return Err(ApiError::BadRequest(INVALID_BODY));
        }
    };
    if patient.missing_required() {
        warn!("Rejected patient: missing required fields");
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    }
    let key = patient.normalized_name();
    store.put(patient.clone()).await;
    debug!("Stored patient under key {:?}", key);
    Ok((Status::Created, Json(patient)))
}

pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Largest patient body accepted by create.
    pub json_limit: ByteUnit,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT_MIB.mebibytes(),
        }
    }
}

impl ServerConfig {
    /// Rocket configuration built from defaults only, so `ROCKET_*` variables
    /// and `Rocket.toml` are never consulted.
    pub fn figment(&self) -> Figment {
        Figment::from(rocket::Config::default())
            .merge(("address", self.address))
            .merge(("port", self.port))
            .merge(("limits", Limits::default().limit("json", self.json_limit)))
    }
}

pub struct ServerNode {
    store: Arc<PatientStore>,
    config: ServerConfig,
}

impl ServerNode {
    /// A node whose store holds the sample patients.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(PatientStore::with_sample_data()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<PatientStore>) -> Self {
        ServerNode { store, config }
    }

    pub fn store(&self) -> Arc<PatientStore> {
        self.store.clone()
    }

    pub fn build(&self) -> Rocket<Build> {
        info!(
            "Patient service configured on {}:{}",
            self.config.address, self.config.port
        );
        rocket::custom(self.config.figment())
            .manage(self.store.clone())
            .attach(Cors)
            .mount(
                "/",
                routes![
                    health_check,
                    list_patients,
                    get_patient,
                    create_patient,
                    cors::preflight,
                ],
            )
    }
}
