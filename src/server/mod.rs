pub mod api;
pub mod reddit;

use crate::services::reddit::RedditClient;
use crate::utils::get_allowed_origins;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub reddit: Arc<RedditClient>,
}

/// Start the axum server
pub async fn serve(
    reddit: Arc<RedditClient>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting sentimenttech server");

    let app_state = AppState { reddit };

    // Configure CORS for the frontend origins
    let origins: Vec<axum::http::HeaderValue> = get_allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    tracing::info!("  GET /");
    tracing::info!("  GET /health");
    tracing::info!("  GET /stocks/{{symbol}}");
    tracing::info!("  GET /stocks/{{symbol}}/price?interval=1D");
    tracing::info!("  GET /stocks/{{symbol}}/sentiment");
    tracing::info!("  GET /stocks/{{symbol}}/reddit");
    tracing::info!("  GET /trending/stocks");
    tracing::info!("  GET /trending/topics");

    // Build router with routes
    let app = Router::new()
        .route("/", get(api::root_handler))
        .route("/health", get(api::health_handler))
        .route("/stocks/{symbol}", get(api::get_stock_info_handler))
        .route("/stocks/{symbol}/price", get(api::get_stock_price_handler))
        .route(
            "/stocks/{symbol}/sentiment",
            get(api::get_stock_sentiment_handler),
        )
        .route(
            "/stocks/{symbol}/reddit",
            get(reddit::get_reddit_posts_handler),
        )
        .route("/trending/stocks", get(api::get_trending_stocks_handler))
        .route("/trending/topics", get(api::get_trending_topics_handler))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
