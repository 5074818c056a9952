/// Environment variables the Reddit client requires
const REQUIRED_VARS: [&str; 3] = [
    "REDDIT_CLIENT_ID",
    "REDDIT_CLIENT_SECRET",
    "REDDIT_USER_AGENT",
];

pub fn run() {
    println!("🔍 Checking sentimenttech environment...\n");

    let mut missing = 0;

    for name in REQUIRED_VARS {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => {
                println!("   ✅ {} is set", name);
            }
            _ => {
                println!("   ❌ {} is not set", name);
                missing += 1;
            }
        }
    }

    match std::env::var("SENTIMENT_ALLOWED_ORIGINS") {
        Ok(extra) if !extra.trim().is_empty() => {
            println!("   ✅ SENTIMENT_ALLOWED_ORIGINS is set ({})", extra);
        }
        _ => {
            println!("   ℹ️  SENTIMENT_ALLOWED_ORIGINS not set (using local defaults)");
        }
    }

    println!();
    if missing > 0 {
        eprintln!("❌ {} required variable(s) missing. /stocks/{{symbol}}/reddit will not work.", missing);
        std::process::exit(1);
    }
    println!("✅ Environment looks good");
}
