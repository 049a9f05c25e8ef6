use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Address the callback server listens on
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:5000")]
    pub server_addr: String,

    // --- LINE Platform Args ---
    /// Channel secret used to verify webhook signatures
    #[arg(long, env = "LINE_CHANNEL_SECRET")]
    pub channel_secret: String,

    /// Channel access token used to call the reply API
    #[arg(long, env = "LINE_CHANNEL_ACCESS_TOKEN")]
    pub channel_access_token: String,

    /// Base URL of the LINE Messaging API
    #[arg(long, env = "LINE_API_BASE", default_value = "https://api.line.me")]
    pub line_api_base: String,

    // --- Completion Service Args ---
    /// API key for the Typhoon completion service
    #[arg(long, env = "TYPHOON_API_KEY")]
    pub typhoon_api_key: String,

    /// Base URL of the Typhoon completion service API
    #[arg(long, env = "TYPHOON_BASE_URL")] // No default, let the client handle defaults if None
    pub typhoon_base_url: Option<String>,

    /// Model name for chat completion (e.g., typhoon-v2.5-30b-a3b-instruct)
    #[arg(long, env = "TYPHOON_MODEL")] // No default, rely on the built-in model if None
    pub typhoon_model: Option<String>,

    /// Sampling temperature for completion requests
    #[arg(long, env = "TYPHOON_TEMPERATURE", default_value = "0.4")]
    pub temperature: f32,

    /// Maximum tokens generated per completion
    #[arg(long, env = "TYPHOON_MAX_TOKENS", default_value = "2048")]
    pub max_tokens: u32,

    /// Timeout in seconds applied to every outbound HTTP call
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,
}
