use crate::error::{AppError, Result};
use crate::models::{RawComment, RedditPost};
use chrono::{DateTime, Duration, Utc};

/// Resolve a relative-time expression like "2h" (meaning "2 hours ago")
/// to an absolute UTC instant: `now` minus the encoded hour count.
///
/// Only hour granularity is supported. The leading integer before the
/// `h` marker is parsed and anything after the marker is ignored, so
/// "2h ago" resolves the same as "2h". Inputs without a parseable
/// leading hour count fail with `MalformedTimestamp`.
pub fn resolve_relative_timestamp(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let (count, _) = raw
        .split_once('h')
        .ok_or_else(|| AppError::MalformedTimestamp(raw.to_string()))?;

    let hours: i64 = count
        .trim()
        .parse()
        .map_err(|_| AppError::MalformedTimestamp(raw.to_string()))?;

    Ok(now - Duration::hours(hours))
}

/// Extract cashtag mentions from free text.
///
/// A mention is a `$` immediately followed by one or more ASCII
/// letters; the longest letter run is taken and upper-cased. Mentions
/// are collected in order of first appearance and duplicates are kept.
/// Returns `None` when the text has no mentions, so serialization
/// leaves the field absent instead of emitting an empty list.
pub fn extract_stock_mentions(content: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = content.chars().collect();
    let mut mentions = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '$' {
            let mut ticker = String::new();
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_alphabetic() {
                ticker.push(chars[j].to_ascii_uppercase());
                j += 1;
            }
            if !ticker.is_empty() {
                mentions.push(ticker);
                i = j;
                continue;
            }
        }
        i += 1;
    }

    if mentions.is_empty() {
        None
    } else {
        Some(mentions)
    }
}

fn require<'a, T>(field: &'a Option<T>, name: &'static str) -> Result<&'a T> {
    field.as_ref().ok_or(AppError::MissingField(name))
}

/// Normalize one raw comment into a canonical post, resolving its
/// relative age against `captured_at`.
///
/// Pure per-record transformation: no record depends on another's
/// fields. Fails with `MissingField` when a required field is absent
/// and `MalformedTimestamp` when the age cannot be parsed.
pub fn normalize_comment(comment: &RawComment, captured_at: DateTime<Utc>) -> Result<RedditPost> {
    let time = require(&comment.time, "time")?;
    let timestamp = resolve_relative_timestamp(time, captured_at)?;
    let content = require(&comment.content, "content")?;

    Ok(RedditPost {
        id: require(&comment.id, "id")?.clone(),
        author: require(&comment.author, "author")?.clone(),
        content: content.clone(),
        likes: *require(&comment.upvotes, "upvotes")?,
        replies: *require(&comment.replies, "replies")?,
        timestamp: timestamp.to_rfc3339(),
        source: require(&comment.source, "source")?.clone(),
        stock_mentions: extract_stock_mentions(content),
        sentiment: comment.sentiment.clone(),
    })
}

/// Normalize a batch of raw comments, preserving fetch order.
///
/// One capture instant is taken for the whole batch so every record
/// resolves against the same reference and relative ordering depends
/// only on the records' own offsets. Fail-fast: the first record that
/// fails aborts the batch with its error; no partial list is returned.
pub fn normalize_comments(comments: &[RawComment]) -> Result<Vec<RedditPost>> {
    let captured_at = Utc::now();
    comments
        .iter()
        .map(|comment| normalize_comment(comment, captured_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn capture_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn sample_comment() -> RawComment {
        RawComment {
            id: Some("p1".to_string()),
            author: Some("u1".to_string()),
            content: Some("Bullish on $NVDA today".to_string()),
            upvotes: Some(10),
            replies: Some(2),
            time: Some("3h".to_string()),
            source: Some("reddit".to_string()),
            sentiment: Some("positive".to_string()),
        }
    }

    #[test]
    fn test_resolve_subtracts_hours() {
        let now = capture_instant();
        let resolved = resolve_relative_timestamp("3h", now).unwrap();
        assert_eq!(resolved, now - Duration::hours(3));
    }

    #[test]
    fn test_resolve_zero_hours() {
        let now = capture_instant();
        assert_eq!(resolve_relative_timestamp("0h", now).unwrap(), now);
    }

    #[test]
    fn test_resolve_ignores_suffix_after_marker() {
        let now = capture_instant();
        let resolved = resolve_relative_timestamp("2h ago", now).unwrap();
        assert_eq!(resolved, now - Duration::hours(2));
    }

    #[test]
    fn test_resolve_rejects_non_numeric() {
        let now = capture_instant();
        assert!(matches!(
            resolve_relative_timestamp("abc", now),
            Err(AppError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_leading_segment() {
        let now = capture_instant();
        assert!(matches!(
            resolve_relative_timestamp("h", now),
            Err(AppError::MalformedTimestamp(_))
        ));
        assert!(matches!(
            resolve_relative_timestamp("", now),
            Err(AppError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_other_units() {
        // Minute and day granularity are not part of the contract
        let now = capture_instant();
        assert!(matches!(
            resolve_relative_timestamp("30m", now),
            Err(AppError::MalformedTimestamp(_))
        ));
        assert!(matches!(
            resolve_relative_timestamp("1d", now),
            Err(AppError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_extract_upper_cases_and_keeps_duplicates() {
        let mentions = extract_stock_mentions("I like $aapl and $AAPL and $tsla").unwrap();
        assert_eq!(mentions, vec!["AAPL", "AAPL", "TSLA"]);
    }

    #[test]
    fn test_extract_preserves_first_appearance_order() {
        let mentions = extract_stock_mentions("$msft then $googl then $msft").unwrap();
        assert_eq!(mentions, vec!["MSFT", "GOOGL", "MSFT"]);
    }

    #[test]
    fn test_extract_none_when_no_mentions() {
        assert!(extract_stock_mentions("no tickers here").is_none());
        assert!(extract_stock_mentions("").is_none());
        assert!(extract_stock_mentions("price is $42 now").is_none());
        assert!(extract_stock_mentions("just a $ sign").is_none());
    }

    #[test]
    fn test_extract_takes_longest_letter_run() {
        let mentions = extract_stock_mentions("watch $BRKb today").unwrap();
        assert_eq!(mentions, vec!["BRKB"]);
    }

    #[test]
    fn test_extract_handles_adjacent_dollar_signs() {
        let mentions = extract_stock_mentions("$$NVDA and $A$B").unwrap();
        assert_eq!(mentions, vec!["NVDA", "A", "B"]);
    }

    #[test]
    fn test_extract_stops_at_non_letter() {
        let mentions = extract_stock_mentions("sell $GOOG.").unwrap();
        assert_eq!(mentions, vec!["GOOG"]);
    }

    #[test]
    fn test_normalize_full_record() {
        let now = capture_instant();
        let post = normalize_comment(&sample_comment(), now).unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.author, "u1");
        assert_eq!(post.content, "Bullish on $NVDA today");
        assert_eq!(post.likes, 10);
        assert_eq!(post.replies, 2);
        assert_eq!(post.timestamp, (now - Duration::hours(3)).to_rfc3339());
        assert_eq!(post.source, "reddit");
        assert_eq!(post.stock_mentions, Some(vec!["NVDA".to_string()]));
        assert_eq!(post.sentiment.as_deref(), Some("positive"));
    }

    #[test]
    fn test_normalize_maps_upvotes_to_likes_including_zero() {
        let mut comment = sample_comment();
        comment.upvotes = Some(0);
        let post = normalize_comment(&comment, capture_instant()).unwrap();
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_normalize_passes_absent_sentiment_through() {
        let mut comment = sample_comment();
        comment.sentiment = None;
        let post = normalize_comment(&comment, capture_instant()).unwrap();
        assert!(post.sentiment.is_none());
    }

    #[test]
    fn test_normalize_missing_upvotes() {
        let mut comment = sample_comment();
        comment.upvotes = None;
        let err = normalize_comment(&comment, capture_instant()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("upvotes")));
    }

    #[test]
    fn test_normalize_missing_source() {
        let mut comment = sample_comment();
        comment.source = None;
        let err = normalize_comment(&comment, capture_instant()).unwrap_err();
        assert!(matches!(err, AppError::MissingField("source")));
    }

    #[test]
    fn test_normalize_malformed_time() {
        let mut comment = sample_comment();
        comment.time = Some("abc".to_string());
        let err = normalize_comment(&comment, capture_instant()).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut first = sample_comment();
        first.id = Some("a".to_string());
        let mut second = sample_comment();
        second.id = Some("b".to_string());
        second.time = Some("5h".to_string());

        let posts = normalize_comments(&[first, second]).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "a");
        assert_eq!(posts[1].id, "b");
    }

    #[test]
    fn test_batch_fails_fast_on_one_bad_record() {
        let mut bad = sample_comment();
        bad.time = Some("soon".to_string());

        let batch = vec![
            sample_comment(),
            sample_comment(),
            sample_comment(),
            bad,
        ];
        let err = normalize_comments(&batch).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)));
    }
}
