use serde::{Deserialize, Serialize};

/// Raw Reddit comment as returned by the platform client.
///
/// Every field is optional at this boundary; the normalizer decides
/// which fields are required and rejects records that lack them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComment {
    pub id: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub upvotes: Option<i64>,
    pub replies: Option<i64>,
    /// Relative age, e.g. "2h" for "2 hours ago"
    pub time: Option<String>,
    pub source: Option<String>,
    pub sentiment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "p1",
            "author": "investor123",
            "content": "Bullish on $NVDA today",
            "upvotes": 42,
            "replies": 7,
            "time": "2h",
            "source": "reddit",
            "sentiment": "positive"
        }"#;

        let comment: RawComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id.as_deref(), Some("p1"));
        assert_eq!(comment.upvotes, Some(42));
        assert_eq!(comment.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_deserialize_partial_record() {
        // Missing fields deserialize to None instead of failing
        let json = r#"{"id": "p2", "content": "no metadata here"}"#;

        let comment: RawComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id.as_deref(), Some("p2"));
        assert!(comment.author.is_none());
        assert!(comment.upvotes.is_none());
        assert!(comment.time.is_none());
    }
}
