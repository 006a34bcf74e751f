use crate::{
    clock::SystemClock, configuration::Configuration, configuration_handler::ConfigurationHandler,
    http::create_app, local_slots::LocalSlots, upstream_slots::UpstreamSlots,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod availability;
mod backend;
mod clock;
mod configuration;
mod configuration_handler;
mod date_validator;
mod error;
mod http;
mod local_slots;
mod summarizer;
#[cfg(test)]
mod testutils;
mod types;
mod upstream_slots;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("#########################");
    println!("# Tee Time Availability #");
    println!("#########################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(?err, "Failed to bind {address}");
            std::process::exit(1);
        }
    };
    info!("Accessible at {address}");

    let app = if let Some(slots_file) = configuration.slots_file() {
        info!(path = %slots_file.display(), "Serving slots from file");
        create_app(LocalSlots::new(slots_file), configuration, SystemClock)
    } else {
        info!(url = %configuration.upstream_url(), "Serving slots from upstream feed");
        let backend = UpstreamSlots::new(configuration.upstream_url());
        create_app(backend, configuration, SystemClock)
    };

    if let Err(err) = axum::serve(listener, app).await {
        error!(?err, "Server stopped");
        std::process::exit(1);
    }
}
