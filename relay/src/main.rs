use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use relay::server::{app, AppState};
use tokio::net::TcpListener;
use webhook_client::Client;

#[derive(Parser, Debug)]
#[clap(about = "Local chat server relaying messages to an n8n webhook")]
struct Args {
    #[clap(short, long, default_value = "127.0.0.1:8000")]
    address: String,
    /// Downstream webhook endpoint; without it /api/send answers 500.
    #[clap(long, env = "N8N_WEBHOOK_URL")]
    webhook_url: Option<String>,
    /// Chat page served at / and /index.html.
    #[clap(long, default_value = "index.html")]
    index: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("args: {:?}", &args);

    let client = match args.webhook_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => Some(Client::new(url)?),
        None => {
            let var = relay::WEBHOOK_URL_VAR;
            tracing::warn!("{var} is not set; set it with: export {var}='your-webhook-url'");
            None
        }
    };

    let state = AppState {
        client,
        index_path: args.index,
    };

    tracing::info!("Listening on http://{}", &args.address);
    let listener = TcpListener::bind(&args.address).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
