pub mod typhoon;

use async_trait::async_trait;

/// Outcome of one completion call. `Failure` carries an operator-facing
/// diagnostic that is logged but never sent to the end user.
#[derive(Debug, Clone)]
pub enum CompletionResult {
    Success { reply_text: String },
    Failure { reason: String },
}

/// Seam over the completion service so the relay can be exercised without
/// network access. All failure modes are folded into `CompletionResult`,
/// never surfaced as `Err` — a broken completion backend must not take the
/// request handler down with it.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, user_text: &str) -> CompletionResult;
}
