pub mod cli;
pub mod config;
pub mod line;
pub mod llm;
pub mod models;
pub mod relay;
pub mod server;

use cli::Args;
use config::prompt::{DEFAULT_CHAT_MODEL, DEFAULT_TYPHOON_BASE_URL};
use line::client::LineClient;
use llm::typhoon::TyphoonClient;
use log::info;
use relay::Relay;
use server::Server;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!(
        "Typhoon Base URL: {}",
        args.typhoon_base_url.as_deref().unwrap_or(DEFAULT_TYPHOON_BASE_URL)
    );
    info!(
        "Chat Model: {}",
        args.typhoon_model.as_deref().unwrap_or(DEFAULT_CHAT_MODEL)
    );
    info!("Temperature: {}", args.temperature);
    info!("Max Tokens: {}", args.max_tokens);
    info!("LINE API Base: {}", args.line_api_base);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("-------------------------");

    let timeout = Duration::from_secs(args.request_timeout_secs);

    let chat = Arc::new(TyphoonClient::new(
        args.typhoon_api_key.clone(),
        args.typhoon_model.clone(),
        args.typhoon_base_url.clone(),
        args.temperature,
        args.max_tokens,
        timeout,
    )?);
    let sender = Arc::new(LineClient::new(
        args.channel_access_token.clone(),
        args.line_api_base.clone(),
        timeout,
    )?);
    let relay = Arc::new(Relay::new(chat, sender));

    let server = Server::new(args.server_addr.clone(), args.channel_secret.clone(), relay);
    server.run().await
}
