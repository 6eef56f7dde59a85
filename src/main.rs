use astra::Server;
use listing_map::config::AppConfig;
use listing_map::geocode::NominatimClient;
use listing_map::router::{handle, AppState};
use listing_map::templates;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("listing_map=info")),
        )
        .init();

    // 1. Configuration and listing feed
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let properties = match config.load_properties() {
        Ok(props) => props,
        Err(e) => {
            error!(error = %e, "could not load property feed");
            std::process::exit(1);
        }
    };

    // 2. Geocoder and the runtime that drives it
    let geocoder = match NominatimClient::new(&config.geocoder) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "geocoder setup failed");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "could not start async runtime");
            std::process::exit(1);
        }
    };

    // 3. Serve
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    info!(%addr, listings = properties.len(), "starting server");

    let state = AppState {
        config,
        properties,
        geocoder: Arc::new(geocoder),
        runtime: runtime.handle().clone(),
    };

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
