use std::sync::Arc;
use tower_http::trace::TraceLayer;

use vehicle_store::modules::vehicles::adapters::outbound::seed_file::load_seed;
use vehicle_store::modules::vehicles::adapters::outbound::vehicle_store_in_memory::InMemoryVehicleStore;
use vehicle_store::shell::config::Config;
use vehicle_store::shell::state::AppState;
use vehicle_store::shell::{http, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;

    let vehicles = load_seed(&config.seed_file).await?;
    tracing::info!(
        path = %config.seed_file.display(),
        count = vehicles.len(),
        "vehicles loaded from seed file"
    );

    let store = Arc::new(InMemoryVehicleStore::from_seed(vehicles)?);
    tracing::info!(next_id = store.next_id().await, "vehicle store ready");

    let state = AppState { vehicles: store };
    let app = http::router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting server at {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
