use crate::error::Result;
use crate::models::RedditPost;
use crate::server::AppState;
use crate::services::post_normalizer::normalize_comments;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{info, instrument, warn};

/// GET /stocks/{symbol}/reddit - Normalized Reddit posts about a ticker
///
/// Fetches raw comments from Reddit and maps each one through the post
/// normalizer, preserving fetch order. Fail-fast: any fetch or
/// normalization failure aborts the whole batch with a single error
/// response; no partial list is returned.
#[instrument(skip(app_state))]
pub async fn get_reddit_posts_handler(
    State(app_state): State<AppState>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    match fetch_and_normalize(&app_state, &symbol).await {
        Ok(posts) => {
            info!(symbol = %symbol, post_count = posts.len(), "Returning normalized reddit posts");
            (StatusCode::OK, Json(posts)).into_response()
        }
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "Reddit pipeline failed");
            reddit_error_response(&e.to_string())
        }
    }
}

async fn fetch_and_normalize(app_state: &AppState, symbol: &str) -> Result<Vec<RedditPost>> {
    let comments = app_state.reddit.fetch_comments_for_ticker(symbol).await?;
    normalize_comments(&comments)
}

fn reddit_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "detail": format!("Reddit API error: {}", message)
        })),
    )
        .into_response()
}
