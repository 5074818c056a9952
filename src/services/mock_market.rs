use crate::models::{
    PriceInterval, PricePoint, SentimentResponse, SentimentScore, SocialPost, StockInfo,
    TrendingStock, TrendingStocksResponse, TrendingTopic, TrendingTopicsResponse,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Base price the mock series oscillates around
const BASE_PRICE: f64 = 198.14;

/// Look up the mock quote catalog.
///
/// Placeholder until the market-data provider integration lands; only
/// a couple of well-known symbols are covered.
pub fn lookup_stock_info(symbol: &str) -> Option<StockInfo> {
    match symbol.to_uppercase().as_str() {
        "AAPL" => Some(StockInfo {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price: 198.14,
            change: 2.34,
            change_percent: 1.18,
            volume: "45.3M".to_string(),
            market_cap: "2.87T".to_string(),
            pe_ratio: 30.21,
        }),
        "MSFT" => Some(StockInfo {
            symbol: "MSFT".to_string(),
            name: "Microsoft Corporation".to_string(),
            price: 417.23,
            change: -1.85,
            change_percent: -0.44,
            volume: "22.1M".to_string(),
            market_cap: "3.1T".to_string(),
            pe_ratio: 35.12,
        }),
        _ => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a deterministic mock OHLCV series for the given window.
///
/// Intraday (1D) produces hourly points from 9:30; longer windows
/// produce one point per period with larger swings for 1Y/5Y.
pub fn generate_price_series(interval: PriceInterval) -> Vec<PricePoint> {
    let points = interval.point_count();
    let mut data = Vec::with_capacity(points);

    if interval == PriceInterval::OneDay {
        for i in 0..points {
            let hour = 9 + i;
            let change = (i as f64 - 4.0) * 0.25;
            data.push(PricePoint {
                time: format!("{}:30", hour),
                open: round2(BASE_PRICE + change - 0.1),
                high: round2(BASE_PRICE + change + 0.2),
                low: round2(BASE_PRICE + change - 0.3),
                close: round2(BASE_PRICE + change),
                volume: Some(1_000_000 + i as u64 * 200_000),
            });
        }
    } else {
        for i in 0..points {
            let mut change = (i as f64 - points as f64 / 2.0) * 0.5;
            if interval.is_long_range() {
                change *= 2.0;
            }
            data.push(PricePoint {
                time: format!("2023-{:02}-{:02}", (i % 12) + 1, (i % 28) + 1),
                open: round2(BASE_PRICE + change - 0.5),
                high: round2(BASE_PRICE + change + 1.0),
                low: round2(BASE_PRICE + change - 1.2),
                close: round2(BASE_PRICE + change),
                volume: Some(10_000_000 + i as u64 * 1_000_000),
            });
        }
    }

    data
}

/// Build the mock aggregate sentiment payload for a symbol.
pub fn build_sentiment_response(symbol: &str, now: DateTime<Utc>) -> SentimentResponse {
    let mut social_sentiment = BTreeMap::new();
    social_sentiment.insert(
        "reddit".to_string(),
        SentimentScore {
            score: 0.45,
            magnitude: 0.9,
            label: "neutral".to_string(),
        },
    );
    social_sentiment.insert(
        "twitter".to_string(),
        SentimentScore {
            score: 0.75,
            magnitude: 0.85,
            label: "positive".to_string(),
        },
    );
    social_sentiment.insert(
        "news".to_string(),
        SentimentScore {
            score: 0.68,
            magnitude: 0.7,
            label: "positive".to_string(),
        },
    );

    SentimentResponse {
        symbol: symbol.to_uppercase(),
        overall_sentiment: SentimentScore {
            score: 0.65,
            magnitude: 0.8,
            label: "positive".to_string(),
        },
        social_sentiment,
        trending_topics: vec![
            "earnings".to_string(),
            "iphone".to_string(),
            "artificial intelligence".to_string(),
            "vision pro".to_string(),
            "tariffs".to_string(),
        ],
        recent_posts: vec![
            SocialPost {
                id: "post1".to_string(),
                platform: "reddit".to_string(),
                content: "Apple's services business continues to grow impressively".to_string(),
                created_at: (now - Duration::hours(2)).to_rfc3339(),
                sentiment: SentimentScore {
                    score: 0.82,
                    magnitude: 0.7,
                    label: "positive".to_string(),
                },
                url: Some("https://reddit.com/r/investing/comments/123456".to_string()),
                author: Some("investor123".to_string()),
                likes: Some(42),
            },
            SocialPost {
                id: "post2".to_string(),
                platform: "twitter".to_string(),
                content: "Vision Pro sales seem to be below expectations. Not a good sign."
                    .to_string(),
                created_at: (now - Duration::hours(5)).to_rfc3339(),
                sentiment: SentimentScore {
                    score: -0.45,
                    magnitude: 0.65,
                    label: "negative".to_string(),
                },
                url: None,
                author: Some("@techanalyst".to_string()),
                likes: Some(118),
            },
        ],
        last_updated: now.to_rfc3339(),
    }
}

/// Build the mock trending-stocks payload.
pub fn build_trending_stocks(now: DateTime<Utc>) -> TrendingStocksResponse {
    TrendingStocksResponse {
        trending_stocks: vec![
            TrendingStock {
                symbol: "NVDA".to_string(),
                name: "NVIDIA Corporation".to_string(),
                sentiment_score: 0.87,
                sentiment_label: "positive".to_string(),
                mention_count: 1245,
                price_change_24h: 2.3,
            },
            TrendingStock {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                sentiment_score: 0.65,
                sentiment_label: "positive".to_string(),
                mention_count: 986,
                price_change_24h: 1.18,
            },
            TrendingStock {
                symbol: "TSLA".to_string(),
                name: "Tesla, Inc.".to_string(),
                sentiment_score: 0.42,
                sentiment_label: "neutral".to_string(),
                mention_count: 875,
                price_change_24h: -0.8,
            },
        ],
        last_updated: now.to_rfc3339(),
    }
}

/// Build the mock trending-topics payload.
pub fn build_trending_topics(now: DateTime<Utc>) -> TrendingTopicsResponse {
    TrendingTopicsResponse {
        trending_topics: vec![
            TrendingTopic {
                topic: "Artificial Intelligence".to_string(),
                sentiment_score: 0.78,
                mention_count: 2341,
                related_stocks: vec!["NVDA".to_string(), "MSFT".to_string(), "GOOG".to_string()],
            },
            TrendingTopic {
                topic: "Interest Rates".to_string(),
                sentiment_score: -0.25,
                mention_count: 1872,
                related_stocks: vec!["JPM".to_string(), "GS".to_string(), "BAC".to_string()],
            },
            TrendingTopic {
                topic: "Semiconductor Shortage".to_string(),
                sentiment_score: 0.15,
                mention_count: 1544,
                related_stocks: vec!["INTC".to_string(), "AMD".to_string(), "TSM".to_string()],
            },
        ],
        last_updated: now.to_rfc3339(),
    }
}
