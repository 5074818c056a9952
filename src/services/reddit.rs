use crate::error::AppError;
use crate::models::RawComment;
use chrono::{DateTime, TimeZone, Utc};
use isahc::auth::{Authentication, Credentials};
use isahc::config::Configurable;
use isahc::prelude::*;
use isahc::HttpClient;
use serde_json::Value;
use std::time::Duration as StdDuration;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE_URL: &str = "https://oauth.reddit.com";

/// Maximum comments fetched per ticker request
const COMMENT_FETCH_LIMIT: u32 = 50;

#[derive(Debug)]
pub enum RedditError {
    Http(isahc::Error),
    Serialization(serde_json::Error),
    Auth(String),
    RateLimit,
    InvalidResponse(String),
}

impl From<isahc::Error> for RedditError {
    fn from(error: isahc::Error) -> Self {
        RedditError::Http(error)
    }
}

impl From<serde_json::Error> for RedditError {
    fn from(error: serde_json::Error) -> Self {
        RedditError::Serialization(error)
    }
}

impl std::fmt::Display for RedditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedditError::Http(e) => write!(f, "HTTP error: {}", e),
            RedditError::Serialization(e) => write!(f, "Serialization error: {}", e),
            RedditError::Auth(s) => write!(f, "Authentication error: {}", s),
            RedditError::RateLimit => write!(f, "Rate limit exceeded"),
            RedditError::InvalidResponse(s) => write!(f, "Invalid response: {}", s),
        }
    }
}

impl std::error::Error for RedditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RedditError::Http(e) => Some(e),
            RedditError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

/// Reddit API credentials, supplied via environment variables
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl RedditConfig {
    /// Load credentials from REDDIT_CLIENT_ID, REDDIT_CLIENT_SECRET and
    /// REDDIT_USER_AGENT. All three are required for the client to
    /// authenticate.
    pub fn from_env() -> crate::error::Result<Self> {
        Ok(Self {
            client_id: require_env("REDDIT_CLIENT_ID")?,
            client_secret: require_env("REDDIT_CLIENT_SECRET")?,
            user_agent: require_env("REDDIT_USER_AGENT")?,
        })
    }
}

fn require_env(name: &str) -> crate::error::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{} is not set", name))),
    }
}

/// Client for fetching raw comments about a ticker from Reddit.
///
/// Stateless per call: each fetch obtains its own access token, so the
/// shared handle is never mutated between requests.
pub struct RedditClient {
    client: HttpClient,
    config: RedditConfig,
    token_url: String,
    api_base_url: String,
}

impl RedditClient {
    pub fn new(config: RedditConfig) -> Result<Self, RedditError> {
        let client = HttpClient::builder()
            .timeout(StdDuration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            token_url: TOKEN_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
        })
    }

    /// Fetch recent raw comments mentioning the ticker's cashtag.
    ///
    /// Returns records in the order the platform listed them. The
    /// relative `time` field carries the comment's age in whole hours.
    pub async fn fetch_comments_for_ticker(
        &self,
        ticker: &str,
    ) -> Result<Vec<RawComment>, RedditError> {
        let token = self.request_access_token().await?;

        let url = format!(
            "{}/search?q=%24{}&sort=new&limit={}&raw_json=1",
            self.api_base_url,
            ticker.to_uppercase(),
            COMMENT_FETCH_LIMIT
        );

        let request = isahc::Request::builder()
            .uri(&url)
            .method("GET")
            .header("Authorization", format!("bearer {}", token))
            .header("User-Agent", self.config.user_agent.as_str())
            .body(())
            .map_err(|e| RedditError::InvalidResponse(format!("Request build error: {}", e)))?;

        let mut response = self.client.send_async(request).await?;
        let status = response.status();

        if status.as_u16() == 429 {
            return Err(RedditError::RateLimit);
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(RedditError::Auth(format!("search rejected: {}", status)));
        }
        if !status.is_success() {
            return Err(RedditError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RedditError::InvalidResponse(format!("Body read error: {}", e)))?;
        let listing: Value = serde_json::from_str(&body)?;

        let comments = parse_listing(&listing, Utc::now());
        tracing::debug!(
            ticker = %ticker,
            comment_count = comments.len(),
            "Fetched raw reddit comments"
        );

        Ok(comments)
    }

    /// Obtain an application-only access token via the client
    /// credentials grant.
    async fn request_access_token(&self) -> Result<String, RedditError> {
        let request = isahc::Request::builder()
            .uri(&self.token_url)
            .method("POST")
            .header("User-Agent", self.config.user_agent.as_str())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .authentication(Authentication::basic())
            .credentials(Credentials::new(
                self.config.client_id.clone(),
                self.config.client_secret.clone(),
            ))
            .body("grant_type=client_credentials")
            .map_err(|e| RedditError::InvalidResponse(format!("Request build error: {}", e)))?;

        let mut response = self.client.send_async(request).await?;
        let status = response.status();

        if status.as_u16() == 429 {
            return Err(RedditError::RateLimit);
        }
        if !status.is_success() {
            return Err(RedditError::Auth(format!("token request rejected: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RedditError::InvalidResponse(format!("Body read error: {}", e)))?;
        let payload: Value = serde_json::from_str(&body)?;

        match payload["access_token"].as_str() {
            Some(token) => Ok(token.to_string()),
            None => {
                let detail = payload["error"].as_str().unwrap_or("no access_token in response");
                Err(RedditError::Auth(detail.to_string()))
            }
        }
    }
}

/// Map a Reddit search listing to raw comment records.
///
/// Comment bodies are preferred; link posts fall back to selftext and
/// then title. The comment's age is rendered as whole hours relative
/// to `now`, matching the relative-time contract the normalizer
/// consumes.
pub fn parse_listing(listing: &Value, now: DateTime<Utc>) -> Vec<RawComment> {
    let children = match listing.pointer("/data/children").and_then(Value::as_array) {
        Some(children) => children,
        None => return Vec::new(),
    };

    children
        .iter()
        .map(|child| {
            let data = &child["data"];

            let content = ["body", "selftext", "title"]
                .iter()
                .find_map(|key| data[*key].as_str().filter(|s| !s.is_empty()))
                .map(str::to_string);

            let time = data["created_utc"]
                .as_f64()
                .and_then(|epoch| Utc.timestamp_opt(epoch as i64, 0).single())
                .map(|created| format!("{}h", (now - created).num_hours().max(0)));

            RawComment {
                id: data["id"].as_str().map(str::to_string),
                author: data["author"].as_str().map(str::to_string),
                content,
                upvotes: data["ups"].as_i64(),
                replies: data["num_comments"].as_i64(),
                time,
                source: Some("reddit".to_string()),
                sentiment: None,
            }
        })
        .collect()
}
