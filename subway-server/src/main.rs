use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::catalog::Catalog;
use subway_server::config::ServerConfig;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the catalog (fail fast if invalid)
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::from_path(path)?
        }
        None => {
            info!("loading bundled NYC sample catalog");
            Catalog::nyc_sample()?
        }
    };
    info!(
        stations = catalog.stations().len(),
        lines = catalog.lines().len(),
        connections = catalog.connections().len(),
        "catalog ready"
    );

    let state = AppState::new(catalog, config.search.clone(), &config.cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        addr = %config.bind,
        strategy = %config.search.strategy,
        "Subway route planner listening"
    );
    info!("  GET  /health                         - Health check");
    info!("  GET  /api/stations                   - All stations");
    info!("  GET  /api/stations/search?q=&limit=  - Search stations");
    info!("  GET  /api/lines                      - Line table");
    info!("  GET  /api/route?from=&to=&strategy=  - Plan a route");

    axum::serve(listener, app).await?;
    Ok(())
}
