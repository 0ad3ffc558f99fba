// patient.rs
use std::fmt;
use rocket::serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use rocket::serde::json::serde_json;
use rocket::serde::{Deserialize, Serialize};

/// A single patient's demographic and condition data.
///
/// Incoming keys match field names ignoring case and unknown keys are skipped.
/// Fields missing from the body, or sent as `null`, stay empty, so the
/// presence checks in [`PatientRecord::missing_required`] see them as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PatientRecord {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub illness: String,
    pub email: String,
}

impl PatientRecord {
    pub fn new(name: &str, date_of_birth: &str, gender: &str, illness: &str, email: &str) -> Self {
        Self {
            name: String::from(name),
            date_of_birth: String::from(date_of_birth),
            gender: String::from(gender),
            illness: String::from(illness),
            email: String::from(email),
        }
    }

    /// Store key for this record.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    /// True when name, date of birth or email is empty.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty() || self.date_of_birth.is_empty() || self.email.is_empty()
    }
}

impl<'de> Deserialize<'de> for PatientRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PatientVisitor)
    }
}

struct PatientVisitor;

impl<'de> Visitor<'de> for PatientVisitor {
    type Value = PatientRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a patient record object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PatientRecord, A::Error> {
        let mut patient = PatientRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = match key.to_lowercase().as_str() {
                "name" => &mut patient.name,
                "dateofbirth" => &mut patient.date_of_birth,
                "gender" => &mut patient.gender,
                "illness" => &mut patient.illness,
                "email" => &mut patient.email,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(patient)
    }
}

/// Decodes the first JSON value in `body` as a patient, ignoring whatever
/// follows it.
pub fn decode_first(body: &str) -> Result<PatientRecord, serde_json::Error> {
    serde_json::Deserializer::from_str(body)
        .into_iter::<PatientRecord>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("empty body")))
}

/// Lowercases a patient name into its store key.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// The records every fresh store starts with.
pub fn sample_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new(
            "Nobody Knows",
            "1985-03-15",
            "Male",
            "Hypertension",
            "nobody.knows@email.com",
        ),
        PatientRecord::new(
            "Johnson Fake",
            "1990-07-22",
            "Female",
            "Type 2 Diabetes",
            "johnson.fake@email.com",
        ),
        PatientRecord::new(
            "Michael Chen",
            "1978-11-08",
            "Male",
            "Asthma",
            "michael.chen@email.com",
        ),
        PatientRecord::new(
            "Emily Lor",
            "1995-02-14",
            "Female",
            "Migraine",
            "emily.lor@email.com",
        ),
    ]
}
