use metro_server::config::ServerConfig;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    if !config.data_dir.is_dir() {
        error!(
            data_dir = %config.data_dir.display(),
            "data directory not found; every network will be reported as unknown"
        );
    }

    let addr = config.bind_addr;
    info!(
        data_dir = %config.data_dir.display(),
        default_network = %config.default_network,
        "starting metro route finder"
    );

    // Build app state and router
    let app = create_router(AppState::from_config(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Metro route finder listening on http://{addr}");
    info!("  GET /        ?from=&destiny=&color=&network=  - Find a route");
    info!("  GET /list    ?network=                        - List stations");
    info!("  GET /health                                   - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
