//! Background context: answers every lookup message with exactly one
//! response.

use std::sync::Arc;
use std::time::Duration;

use inwen_dispatcher::{Dispatch, LookupError};
use inwen_types::{LookupReply, LookupResponse, PageMessage};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

pub async fn background_loop(
    dispatcher: Arc<dyn Dispatch>,
    requests: AsyncReceiver<PageMessage>,
    replies: AsyncSender<LookupResponse>,
    timeout: Duration,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut in_flight = JoinSet::new();

    tracing::info!("[BACKGROUND] Waiting for lookup requests");
    loop {
        tokio::select! {
            message = requests.recv() => {
                let Ok(message) = message else {
                    tracing::info!("[BACKGROUND] Request channel closed");
                    break;
                };
                in_flight.spawn(answer(
                    dispatcher.clone(),
                    message,
                    replies.clone(),
                    timeout,
                ));
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined {
                    tracing::error!("[BACKGROUND] Lookup task panicked: {e}");
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("[BACKGROUND] Stopping");
                in_flight.abort_all();
                return Ok(());
            }
        }
    }

    // Pending lookups still owe their replies
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            tracing::error!("[BACKGROUND] Lookup task panicked: {e}");
        }
    }
    Ok(())
}

async fn answer(
    dispatcher: Arc<dyn Dispatch>,
    message: PageMessage,
    replies: AsyncSender<LookupResponse>,
    timeout: Duration,
) {
    let PageMessage::LookupRequest { request, sequence } = message;
    tracing::debug!("[BACKGROUND] Lookup #{} for '{}'", sequence, request.term);

    let result = match tokio::time::timeout(timeout, dispatcher.dispatch(request)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::network(format!(
            "Lookup timed out after {timeout:?}"
        ))),
    };

    if let Err(e) = &result {
        tracing::warn!("[BACKGROUND] Lookup #{} failed: {}", sequence, e);
    }

    let response = LookupResponse {
        sequence,
        reply: LookupReply::from(result),
    };
    if replies.send(response).await.is_err() {
        tracing::debug!("[BACKGROUND] Page went away before reply #{}", sequence);
    }
}
