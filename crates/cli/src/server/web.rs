use relaydns_api::{create_admin_routes, AppState};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        admin_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        "Starting admin web server"
    );

    if !bind_addr.ip().is_loopback() {
        warn!(
            bind_address = %bind_addr,
            "Admin interface has no authentication and is reachable beyond localhost"
        );
    }

    let app = create_admin_routes(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Admin web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}
