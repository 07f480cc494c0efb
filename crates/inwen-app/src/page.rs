//! Page context: validates selections, numbers lookups and keeps the
//! overlay in step with the replies.

use inwen_core::{Selection, SelectionValidator};
use inwen_overlay::{InputEvent, OverlayController, Surface};
use inwen_types::{LookupResponse, PageMessage, Sequence};
use kanal::AsyncSender;

/// Shown when the background context never answers
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub struct PageContext<S: Surface> {
    validator: SelectionValidator,
    overlay: OverlayController<S>,
    requests: AsyncSender<PageMessage>,
    /// Last sequence number handed out
    issued: Sequence,
}

impl<S: Surface> PageContext<S> {
    pub fn new(
        validator: SelectionValidator,
        overlay: OverlayController<S>,
        requests: AsyncSender<PageMessage>,
    ) -> Self {
        Self {
            validator,
            overlay,
            requests,
            issued: 0,
        }
    }

    pub fn overlay(&self) -> &OverlayController<S> {
        &self.overlay
    }

    /// Double-click handler. Returns the sequence of the issued lookup, or
    /// `None` when the selection was filtered out.
    pub async fn on_selection(&mut self, selection: &Selection) -> Option<Sequence> {
        let request = self.validator.validate(selection).ok()?;

        self.issued += 1;
        let sequence = self.issued;

        // Loading is on screen before the request leaves the page
        self.overlay.show_loading(sequence);

        if let Err(e) = self
            .requests
            .send(PageMessage::lookup(request, sequence))
            .await
        {
            tracing::error!("Failed to reach background context: {}", e);
            self.overlay.show_error(sequence, UNKNOWN_ERROR);
        }

        Some(sequence)
    }

    pub fn on_response(&mut self, response: LookupResponse) -> bool {
        self.overlay.apply(response)
    }

    pub fn on_input(&mut self, event: InputEvent) -> bool {
        self.overlay.handle_input(event)
    }

    /// The reply channel is gone; a pending panel would spin forever
    pub fn on_background_closed(&mut self) {
        if self.overlay.state().is_loading()
            && let Some(sequence) = self.overlay.latest_sequence()
        {
            self.overlay.show_error(sequence, UNKNOWN_ERROR);
        }
    }
}
