use crate::server;
use crate::services::reddit::{RedditClient, RedditConfig};
use std::sync::Arc;

pub async fn run(port: u16) {
    println!("🚀 Starting sentimenttech server on port {}", port);

    let config = match RedditConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Set REDDIT_CLIENT_ID, REDDIT_CLIENT_SECRET and REDDIT_USER_AGENT.");
            eprintln!("   Run `sentimenttech doctor` to check the environment.");
            std::process::exit(1);
        }
    };

    let reddit_client = match RedditClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Failed to create Reddit client: {}", e);
            std::process::exit(1);
        }
    };
    println!("✅ Reddit client ready");

    println!("🌐 Starting HTTP server...");
    if let Err(e) = server::serve(reddit_client, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
