use serde::{Deserialize, Serialize};

/// Normalized Reddit post returned by `GET /stocks/{symbol}/reddit`.
///
/// Field names match the frontend contract: `upvotes` from the raw
/// comment becomes `likes`, the relative age becomes an absolute
/// RFC 3339 timestamp, and extracted ticker mentions are exposed as
/// `stockMentions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub replies: i64,
    /// Absolute timestamp, ISO 8601 with UTC offset
    pub timestamp: String,
    pub source: String,
    #[serde(rename = "stockMentions", skip_serializing_if = "Option::is_none")]
    pub stock_mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> RedditPost {
        RedditPost {
            id: "p1".to_string(),
            author: "u1".to_string(),
            content: "Bullish on $NVDA today".to_string(),
            likes: 10,
            replies: 2,
            timestamp: "2024-05-01T09:00:00+00:00".to_string(),
            source: "reddit".to_string(),
            stock_mentions: Some(vec!["NVDA".to_string()]),
            sentiment: Some("positive".to_string()),
        }
    }

    #[test]
    fn test_serialize_camel_case_mentions() {
        let json = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(json["stockMentions"][0], "NVDA");
        assert_eq!(json["likes"], 10);
        // No snake_case leak
        assert!(json.get("stock_mentions").is_none());
    }

    #[test]
    fn test_serialize_skips_absent_optionals() {
        let mut post = sample_post();
        post.stock_mentions = None;
        post.sentiment = None;

        let json = serde_json::to_value(post).unwrap();
        assert!(json.get("stockMentions").is_none());
        assert!(json.get("sentiment").is_none());
    }
}
