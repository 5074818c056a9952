use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "sentimenttech")]
#[command(about = "SentimentTech API - real-time sentiment analysis for financial markets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
    /// Check required environment configuration
    Doctor,
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port).await;
        }
        Commands::Doctor => {
            commands::doctor::run();
        }
    }
}
