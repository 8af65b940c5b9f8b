#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for locality crime lookups.
//!
//! Serves the REST API (`/zones`, `/crime-info`) backed by the `SQLite`
//! locality store, plus the static Leaflet landing page. Every request
//! opens its own read-only view of the store and drops it on completion;
//! there is no shared mutable state.

mod handlers;
pub mod rating;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

/// Explicit service configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the `SQLite` locality store.
    pub db_path: PathBuf,
    /// Address to bind the HTTP listener to.
    pub bind_addr: String,
    /// Port to bind the HTTP listener to.
    pub port: u16,
    /// Directory the static landing page is served from.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Builds the configuration from environment variables, falling back
    /// to the fixed names the importer writes.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("CRIME_ZONES_DB")
                .map_or_else(|_| PathBuf::from("crime_data.db"), PathBuf::from),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: std::env::var("STATIC_DIR")
                .map_or_else(|_| PathBuf::from("static"), PathBuf::from),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Service configuration; handlers read the store path from here.
    pub config: ServerConfig,
}

/// Registers the API routes. Split out from [`run_server`] so tests can
/// mount the same routes on a test service.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/zones", web::get().to(handlers::zones))
        .route("/crime-info", web::get().to(handlers::crime_info));
}

/// Starts the crime zones API server.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let port = config.port;

    log::info!("Serving crime data from {}", config.db_path.display());
    log::info!("Starting server on {bind_addr}:{port}");

    let state = web::Data::new(AppState { config });

    HttpServer::new(move || {
        let cors = Cors::permissive();
        let static_dir = state.config.static_dir.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(routes)
            // Serve the Leaflet landing page
            .service(Files::new("/", static_dir).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
