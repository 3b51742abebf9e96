use bus_server::arrivals::{ArrivalsBackend, ArrivalsClient, MockArrivalsClient};
use bus_server::config::ServerConfig;
use bus_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Pick the arrivals backend
    let backend = match &config.mock_data_dir {
        Some(dir) => {
            let mock = MockArrivalsClient::new(dir)?;
            info!(
                dir = %dir.display(),
                stops = mock.available_stops().len(),
                "serving mock arrivals"
            );
            ArrivalsBackend::Mock(mock)
        }
        None => {
            let client = ArrivalsClient::new(config.api.clone())?;
            info!(base_url = client.base_url(), "using live arrivals API");
            ArrivalsBackend::Live(client)
        }
    };

    let state = AppState::new(backend);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Bus arrival board listening on http://{}", config.addr);
    info!("  GET /                - Arrival board");
    info!("  GET /arrivals?id=ID  - Arrivals for a stop (HTML or JSON)");
    info!("  GET /health          - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
