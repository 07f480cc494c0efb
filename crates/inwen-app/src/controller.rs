use std::sync::Arc;
use std::time::Duration;

use inwen_config::channel::ChannelConfig;
use inwen_core::SelectionValidator;
use inwen_dispatcher::Dispatch;
use inwen_overlay::{OverlayController, Surface};
use inwen_types::{LookupResponse, PageMessage};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::background::background_loop;
use crate::events::{PageEvent, page_loop};
use crate::io::stdin_io;
use crate::page::PageContext;
use crate::state::AppState;

/// Slack on top of the webhook timeout before the background loop gives up
const TIMEOUT_GRACE: Duration = Duration::from_secs(1);

/// Centralized channel management
pub struct ChannelSet {
    pub page_to_background: (AsyncSender<PageMessage>, AsyncReceiver<PageMessage>),
    pub background_to_page: (AsyncSender<LookupResponse>, AsyncReceiver<LookupResponse>),
    pub gestures: (AsyncSender<PageEvent>, AsyncReceiver<PageEvent>),
}

impl ChannelSet {
    pub fn new(config: &ChannelConfig) -> Self {
        Self {
            page_to_background: kanal::bounded_async(config.request_capacity.max(1)),
            background_to_page: kanal::bounded_async(config.reply_capacity.max(1)),
            gestures: kanal::bounded_async(config.request_capacity.max(1)),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channels: ChannelSet) -> Self {
        Self {
            channels,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks<S>(
        &self,
        dispatcher: Arc<dyn Dispatch>,
        validator: SelectionValidator,
        surface: S,
        source_url: String,
    ) -> JoinSet<anyhow::Result<()>>
    where
        S: Surface + Send + 'static,
    {
        let (timeout, overlay) = {
            let config = self.state.config.read().await;
            (config.dispatch.timeout() + TIMEOUT_GRACE, config.overlay.clone())
        };

        let mut tasks = JoinSet::new();

        // Background context
        tasks.spawn(background_loop(
            dispatcher,
            self.channels.page_to_background.1.clone(),
            self.channels.background_to_page.0.clone(),
            timeout,
            self.cancel_token.child_token(),
        ));

        // Page context
        let mut page = PageContext::new(
            validator,
            OverlayController::new(surface, &overlay),
            self.channels.page_to_background.0.clone(),
        );
        let events = self.channels.gestures.1.clone();
        let replies = self.channels.background_to_page.1.clone();
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move { page_loop(&mut page, events, replies, cancel).await });

        // Stdin gestures
        tasks.spawn(stdin_io(
            self.state.clone(),
            source_url,
            self.cancel_token.child_token(),
            self.channels.gestures.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
