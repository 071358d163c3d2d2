use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::graph::sample::sample_village_network;
use crate::web::api::{create_router, AppState};

/// Start the web server on the sample village network
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
        }
    }
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = AppState::new(sample_village_network());

    let mut app = Router::new()
        // API routes
        .merge(create_router())
        // Static file serving for the web frontend
        .nest_service("/", ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    println!("🚀 Village Paths server starting on http://{}", addr);
    println!("🗺️  Network map available at http://{}/api/network", addr);
    println!("📁 Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
