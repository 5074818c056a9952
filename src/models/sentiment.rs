use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentiment score with a magnitude and a label
/// (label is one of "positive", "neutral", "negative")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub score: f64,
    pub magnitude: f64,
    pub label: String,
}

/// A social media post attached to an aggregate sentiment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub platform: String,
    pub content: String,
    pub created_at: String,
    pub sentiment: SentimentScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

/// Response body for `GET /stocks/{symbol}/sentiment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub symbol: String,
    pub overall_sentiment: SentimentScore,
    /// Per-platform scores, keyed by platform name (sorted for stable output)
    pub social_sentiment: BTreeMap<String, SentimentScore>,
    pub trending_topics: Vec<String>,
    pub recent_posts: Vec<SocialPost>,
    pub last_updated: String,
}

/// One entry in the trending-stocks list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingStock {
    pub symbol: String,
    pub name: String,
    pub sentiment_score: f64,
    pub sentiment_label: String,
    pub mention_count: u64,
    pub price_change_24h: f64,
}

/// Response body for `GET /trending/stocks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingStocksResponse {
    pub trending_stocks: Vec<TrendingStock>,
    pub last_updated: String,
}

/// One entry in the trending-topics list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    pub sentiment_score: f64,
    pub mention_count: u64,
    pub related_stocks: Vec<String>,
}

/// Response body for `GET /trending/topics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopicsResponse {
    pub trending_topics: Vec<TrendingTopic>,
    pub last_updated: String,
}
