// store.rs
use std::collections::HashMap;
use log::debug;
use tokio::sync::RwLock;

use crate::patient::{normalize, sample_patients, PatientRecord};

/// In-memory patient table keyed by normalized name.
///
/// Lookups and listing take the shared lock, inserts take the exclusive lock.
/// Every method holds the lock only for the map access itself.
pub struct PatientStore {
    patients: RwLock<HashMap<String, PatientRecord>>,
}

impl PatientStore {
    pub fn new() -> Self {
        PatientStore {
            patients: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-populated with [`sample_patients`].
    pub fn with_sample_data() -> Self {
        let patients = sample_patients()
            .into_iter()
            .map(|patient| (patient.normalized_name(), patient))
            .collect::<HashMap<_, _>>();
        PatientStore {
            patients: RwLock::new(patients),
        }
    }

    /// Case-insensitive exact match on name.
    pub async fn get(&self, name: &str) -> Option<PatientRecord> {
        let patients = self.patients.read().await;
        patients.get(&normalize(name)).cloned()
    }

    /// Inserts the record, replacing any record whose name matches ignoring case.
    /// Required fields must already be checked by the caller.
    pub async fn put(&self, patient: PatientRecord) {
        let key = patient.normalized_name();
        let mut patients = self.patients.write().await;
        if patients.insert(key, patient).is_some() {
            debug!("Overwrote existing patient record");
        }
    }

    /// Snapshot of every record, in no particular order.
    pub async fn list(&self) -> Vec<PatientRecord> {
        let patients = self.patients.read().await;
        patients.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.patients.read().await.len()
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}
