use std::net::SocketAddr;

use interview_dashboard_backend::{
    app_router,
    config::{get_config, init_config},
    storage::local_map::LocalMap,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let map = LocalMap::open(&config.data_dir)?;
    info!("Persisting store blobs under {}", config.data_dir);

    let app_state = AppState::new(map);

    let app = app_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
