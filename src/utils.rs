/// Allowed CORS origins: local frontend defaults plus any extras from
/// the SENTIMENT_ALLOWED_ORIGINS environment variable (comma-separated)
pub fn get_allowed_origins() -> Vec<String> {
    let mut origins = vec![
        "http://127.0.0.1:3000".to_string(),
        "http://localhost:3000".to_string(),
    ];

    if let Ok(extra) = std::env::var("SENTIMENT_ALLOWED_ORIGINS") {
        for origin in extra.split(',') {
            let origin = origin.trim();
            if !origin.is_empty() {
                origins.push(origin.to_string());
            }
        }
    }

    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins_present() {
        let origins = get_allowed_origins();
        assert!(origins.contains(&"http://127.0.0.1:3000".to_string()));
        assert!(origins.contains(&"http://localhost:3000".to_string()));
    }
}
