use clap::Command;
use log::{error, info};
use patient_service::server::{ServerConfig, ServerNode};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(fern::log_file("output.log")?)
        .apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let _ = Command::new("patient-service")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory patient records over HTTP")
        .get_matches();
    let _ = setup_logger();

    let config = ServerConfig::default();
    info!("Starting patient service on port {}", config.port);
    let server_node = ServerNode::new(config);
    if let Err(e) = server_node.build().launch().await {
        error!("Patient service stopped: {}", e);
        return Err(e);
    }
    Ok(())
}
