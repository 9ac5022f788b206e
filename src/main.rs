use crate::auth::SessionContext;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::listings::listing_source_for;
use crate::mailer::mailer_from_config;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod contact;
mod db;
mod domain;
mod errors;
mod listings;
mod mailer;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load();

    let db = Database::new(&config.database_path);
    if let Err(e) = init_db(&db) {
        tracing::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let listings = match listing_source_for(config.listing_source, &db) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Listing source setup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid BIND_ADDR '{}': {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let state = AppState {
        mailer: mailer_from_config(&config),
        listings,
        db,
        config,
    };

    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(state.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err, &SessionContext::anonymous()),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
