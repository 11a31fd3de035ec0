use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::models::{Query, WebhookBody};
use crate::signature::{self, SIGNATURE_HEADER};
use crate::state::AppState;

pub async fn health() -> &'static str {
    "OK"
}

/// Webhook endpoint: answer every text message in the delivery.
///
/// Deliveries without a valid signature are rejected before parsing. Reply
/// problems are logged, not reported back, so the platform does not
/// redeliver events that were already answered.
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        tracing::warn!("webhook delivery without signature");
        return StatusCode::BAD_REQUEST;
    };
    if !signature::verify(&state.channel_secret, body.as_bytes(), signature) {
        tracing::warn!("webhook signature mismatch");
        return StatusCode::BAD_REQUEST;
    }

    let body: WebhookBody = match serde_json::from_str(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "malformed webhook body");
            return StatusCode::BAD_REQUEST;
        }
    };

    for query in body.events.iter().filter_map(|event| event.query()) {
        handle_query(&state, query).await;
    }

    StatusCode::OK
}

async fn handle_query(state: &AppState, query: Query) {
    let resolver = state.resolver.clone();
    let text = query.text;
    let reply = match tokio::task::spawn_blocking(move || resolver.answer(&text)).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "resolver task failed");
            return;
        }
    };

    if let Err(e) = state.reply_client.send(&query.reply_token, &reply).await {
        tracing::error!(error = %e, "failed to send reply");
    }
}
