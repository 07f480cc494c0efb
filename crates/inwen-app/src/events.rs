use inwen_core::Selection;
use inwen_overlay::{InputEvent, Surface};
use inwen_types::LookupResponse;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::page::PageContext;

/// Something the user did on the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Double-click on a word
    Selection(Selection),
    Input(InputEvent),
    Quit,
}

/// Page context main loop. Gestures and replies are handled one at a time.
pub async fn page_loop<S: Surface>(
    page: &mut PageContext<S>,
    events: AsyncReceiver<PageEvent>,
    replies: AsyncReceiver<LookupResponse>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[PAGE] Waiting for gestures");
    loop {
        tokio::select! {
            event = events.recv() => {
                let Ok(event) = event else {
                    tracing::info!("[PAGE] Gesture source closed");
                    break;
                };
                if !handle_event(page, event).await {
                    break;
                }
            }
            response = replies.recv() => {
                match response {
                    Ok(response) => {
                        let sequence = response.sequence;
                        if !page.on_response(response) {
                            tracing::debug!("[PAGE] Reply #{} not shown", sequence);
                        }
                    }
                    Err(_) => {
                        page.on_background_closed();
                        anyhow::bail!("background context closed");
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("[PAGE] Stopping");
                break;
            }
        }
    }

    Ok(())
}

/// Returns `false` when the page should stop
async fn handle_event<S: Surface>(page: &mut PageContext<S>, event: PageEvent) -> bool {
    match event {
        PageEvent::Selection(selection) => {
            if let Some(sequence) = page.on_selection(&selection).await {
                tracing::info!("[PAGE] Lookup #{} for '{}'", sequence, selection.text.trim());
            }
        }
        PageEvent::Input(input) => {
            page.on_input(input);
        }
        PageEvent::Quit => return false,
    }
    true
}
