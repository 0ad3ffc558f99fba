use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::info;
use patient_client::patient_client::DEFAULT_SERVER;
use patient_client::{HttpPatientClient, PatientApi, PatientRecord};
use patient_service::server::HealthStatus;

fn cli() -> Command<'static> {
    Command::new("patient-client")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Talks to a patient service")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .takes_value(true)
                .default_value(DEFAULT_SERVER)
                .help("Base url of the patient service"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List every patient"))
        .subcommand(
            Command::new("get")
                .about("Look a patient up by name")
                .arg(Arg::new("name").required(true).help("Patient name, any casing")),
        )
        .subcommand(
            Command::new("create")
                .about("Create or replace a patient")
                .arg(Arg::new("name").long("name").takes_value(true).required(true))
                .arg(Arg::new("dob").long("dob").takes_value(true).required(true).help("Date of birth, YYYY-MM-DD"))
                .arg(Arg::new("gender").long("gender").takes_value(true).default_value(""))
                .arg(Arg::new("illness").long("illness").takes_value(true).default_value(""))
                .arg(Arg::new("email").long("email").takes_value(true).required(true)),
        )
        .subcommand(Command::new("health").about("Check service health"))
}

fn value_or_empty<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_default()
}

fn record_from(matches: &ArgMatches) -> PatientRecord {
    PatientRecord::new(
        value_or_empty(matches, "name"),
        value_or_empty(matches, "dob"),
        value_or_empty(matches, "gender"),
        value_or_empty(matches, "illness"),
        value_or_empty(matches, "email"),
    )
}

fn print_patient(patient: &PatientRecord) {
    println!(
        "{} | born {} | {} | {} | {}",
        patient.name, patient.date_of_birth, patient.gender, patient.illness, patient.email
    );
}

fn print_health(health: &HealthStatus) {
    println!("{} at {}", health.status, health.time);
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let matches = cli().get_matches();

    let server = matches.value_of("server").unwrap_or(DEFAULT_SERVER);
    let client = HttpPatientClient::new(server)?;
    info!("Using patient service at {}", client.base_url());

    match matches.subcommand() {
        Some(("list", _)) => {
            let patients = client
                .list_patients()
                .await
                .context("Failed to list patients")?;
            for patient in &patients {
                print_patient(patient);
            }
            println!("{} patient(s)", patients.len());
        }
        Some(("get", sub)) => {
            let name = sub.value_of("name").unwrap_or_default();
            let patient = client
                .get_patient(name)
                .await
                .with_context(|| format!("Failed to fetch patient {}", name))?;
            print_patient(&patient);
        }
        Some(("create", sub)) => {
            let patient = client
                .create_patient(&record_from(sub))
                .await
                .context("Failed to create patient")?;
            print_patient(&patient);
        }
        Some(("health", _)) => {
            let health = client.health().await.context("Health check failed")?;
            print_health(&health);
        }
        _ => unreachable!("a subcommand is required"),
    }
    Ok(())
}
