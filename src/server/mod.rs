use crate::line::signature;
use crate::models::webhook::WebhookEnvelope;
use crate::relay::Relay;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use log::{debug, error, info};
use std::error::Error;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const SIGNATURE_HEADER: &str = "X-Line-Signature";

#[derive(Clone)]
struct AppState {
    channel_secret: Arc<String>,
    relay: Arc<Relay>,
}

pub struct Server {
    addr: String,
    channel_secret: String,
    relay: Arc<Relay>,
}

impl Server {
    pub fn new(addr: String, channel_secret: String, relay: Arc<Relay>) -> Self {
        Self {
            addr,
            channel_secret,
            relay,
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = router(self.channel_secret.clone(), self.relay.clone());
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Callback server listening on: http://{}", self.addr);
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

pub fn router(channel_secret: String, relay: Arc<Relay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/callback", post(callback_handler))
        .layer(cors)
        .with_state(AppState {
            channel_secret: Arc::new(channel_secret),
            relay,
        })
}

/// Webhook gateway. Verifies the platform signature over the raw body
/// bytes, parses the envelope, and fires one independent relay task per
/// text-message event. The 200 ack is returned as soon as dispatch happens;
/// it never waits on the completion service.
async fn callback_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let sig = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(s) => s,
        None => {
            error!("Callback rejected: missing {} header", SIGNATURE_HEADER);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if !signature::verify(&state.channel_secret, &body, sig) {
        error!("Callback rejected: signature mismatch");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(env) => env,
        Err(e) => {
            error!("Callback rejected: unparsable body: {}", e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    for event in envelope.events {
        match event.into_incoming() {
            Some(msg) => {
                let relay = state.relay.clone();
                tokio::spawn(async move {
                    if let Err(e) = relay.process(msg).await {
                        error!("Reply dispatch failed: {}", e);
                    }
                });
            }
            None => debug!("Skipping non-text event"),
        }
    }

    (StatusCode::OK, "OK").into_response()
}
