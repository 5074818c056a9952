use crate::models::{PriceInterval, StockPriceResponse};
use crate::services::mock_market;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use axum_extra::extract::Query;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// GET / - Service metadata
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "SentimentTech API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": [
            "/stocks/{symbol}",
            "/stocks/{symbol}/price",
            "/stocks/{symbol}/sentiment",
            "/stocks/{symbol}/reddit",
            "/trending/stocks",
            "/trending/topics"
        ]
    }))
}

/// GET /health - Liveness check
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// GET /stocks/{symbol} - Current stock information
///
/// Serves the mock quote catalog; unknown symbols are a 404.
#[instrument]
pub async fn get_stock_info_handler(Path(symbol): Path<String>) -> impl IntoResponse {
    info!(symbol = %symbol, "Fetching stock info");

    match mock_market::lookup_stock_info(&symbol) {
        Some(stock) => (StatusCode::OK, Json(stock)).into_response(),
        None => {
            warn!(symbol = %symbol, "Stock not found");
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "detail": format!("Stock {} not found", symbol)
                })),
            )
                .into_response()
        }
    }
}

/// Query parameters for /stocks/{symbol}/price
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    /// Time interval: 1D (default), 1W, 1M, 3M, 1Y, 5Y
    pub interval: Option<String>,
}

/// GET /stocks/{symbol}/price - Historical price data
///
/// Examples:
/// - /stocks/AAPL/price (defaults to 1D)
/// - /stocks/AAPL/price?interval=1Y
#[instrument]
pub async fn get_stock_price_handler(
    Path(symbol): Path<String>,
    Query(params): Query<PriceQuery>,
) -> impl IntoResponse {
    let interval = match params.interval.as_deref() {
        Some(raw) => match PriceInterval::from_str(raw) {
            Ok(interval) => interval,
            Err(_) => {
                warn!(interval = %raw, "Invalid interval parameter");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "detail": "Invalid interval. Must be one of 1D, 1W, 1M, 3M, 1Y, 5Y"
                    })),
                )
                    .into_response();
            }
        },
        None => PriceInterval::default(),
    };

    info!(symbol = %symbol, interval = interval.as_str(), "Fetching price data");

    let data = mock_market::generate_price_series(interval);
    debug!(point_count = data.len(), "Generated price series");

    let response = StockPriceResponse {
        symbol: symbol.to_uppercase(),
        interval: interval.as_str().to_string(),
        data,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /stocks/{symbol}/sentiment - Aggregate sentiment for a stock
#[instrument]
pub async fn get_stock_sentiment_handler(Path(symbol): Path<String>) -> impl IntoResponse {
    info!(symbol = %symbol, "Fetching sentiment data");

    let response = mock_market::build_sentiment_response(&symbol, Utc::now());
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /trending/stocks - Stocks trending on social media
#[instrument]
pub async fn get_trending_stocks_handler() -> impl IntoResponse {
    info!("Fetching trending stocks");

    let response = mock_market::build_trending_stocks(Utc::now());
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /trending/topics - Trending financial topics
#[instrument]
pub async fn get_trending_topics_handler() -> impl IntoResponse {
    info!("Fetching trending topics");

    let response = mock_market::build_trending_topics(Utc::now());
    (StatusCode::OK, Json(response)).into_response()
}
