//! Owner of the one overlay panel per page.
//!
//! `Idle -> Loading -> Success | Error -> Idle`, and any non-idle state goes
//! back to `Loading` when a newer lookup starts. Replies are matched against
//! the sequence number of the latest lookup; anything else is stale.

use inwen_config::overlay::OverlayConfig;
use inwen_types::{Explanation, LookupReply, LookupResponse, Sequence};

use crate::render::PanelView;
use crate::state::OverlayState;
use crate::surface::{InputEvent, Key, Listener, PanelId, Rect, Surface};

const LISTENERS: [Listener; 2] = [Listener::EscapeKey, Listener::OutsidePointer];

#[derive(Debug, Clone, Copy)]
struct ActivePanel {
    id: PanelId,
    bounds: Rect,
}

pub struct OverlayController<S: Surface> {
    surface: S,
    bounds: Rect,
    state: OverlayState,
    panel: Option<ActivePanel>,
    next_panel_id: u64,
    /// Sequence of the lookup the panel belongs to
    latest: Option<Sequence>,
}

impl<S: Surface> OverlayController<S> {
    pub fn new(surface: S, config: &OverlayConfig) -> Self {
        Self {
            surface,
            bounds: panel_bounds(config),
            state: OverlayState::Idle,
            panel: None,
            next_panel_id: 0,
            latest: None,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn latest_sequence(&self) -> Option<Sequence> {
        self.latest
    }

    /// Replace whatever is shown with a fresh loading panel for `sequence`
    pub fn show_loading(&mut self, sequence: Sequence) {
        if let Some(latest) = self.latest
            && sequence <= latest
        {
            tracing::warn!("Sequence {} is not newer than {}", sequence, latest);
        }

        self.dismiss();

        self.next_panel_id += 1;
        let panel = ActivePanel {
            id: PanelId(self.next_panel_id),
            bounds: self.bounds,
        };
        self.surface.mount(panel.id, panel.bounds);
        self.surface.render(panel.id, &PanelView::loading());
        for listener in LISTENERS {
            self.surface.add_listener(listener);
        }

        self.panel = Some(panel);
        self.latest = Some(sequence);
        self.state = OverlayState::Loading;
        tracing::debug!("Overlay loading for lookup #{}", sequence);
    }

    /// Render a result. Returns `false` when the reply is stale or the panel
    /// was already dismissed.
    pub fn show_success(&mut self, sequence: Sequence, explanation: Explanation) -> bool {
        let Some(panel) = self.accepting(sequence) else {
            return false;
        };
        self.surface
            .render(panel.id, &PanelView::explanation(&explanation));
        self.state = OverlayState::Success(explanation);
        true
    }

    /// Render an error block. Same staleness rules as `show_success`.
    pub fn show_error(&mut self, sequence: Sequence, message: impl Into<String>) -> bool {
        let Some(panel) = self.accepting(sequence) else {
            return false;
        };
        let message = message.into();
        self.surface.render(panel.id, &PanelView::error(message.clone()));
        self.state = OverlayState::Error(message);
        true
    }

    pub fn apply(&mut self, response: LookupResponse) -> bool {
        match response.reply {
            LookupReply::Ok(explanation) => self.show_success(response.sequence, explanation),
            LookupReply::Err(message) => self.show_error(response.sequence, message),
        }
    }

    /// Remove the panel and its listeners. No-op when nothing is shown.
    pub fn dismiss(&mut self) {
        let Some(panel) = self.panel.take() else {
            return;
        };
        self.surface.unmount(panel.id);
        for listener in LISTENERS {
            self.surface.remove_listener(listener);
        }
        self.state = OverlayState::Idle;
        tracing::debug!("Overlay dismissed");
    }

    /// Route a page input event. Returns `true` if it dismissed the panel.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let Some(panel) = self.panel else {
            return false;
        };

        let dismiss = match event {
            InputEvent::KeyDown(Key::Escape) => true,
            InputEvent::KeyDown(Key::Other(_)) => false,
            InputEvent::PointerDown(point) => !panel.bounds.contains(point),
            InputEvent::CloseButton => true,
        };

        if dismiss {
            self.dismiss();
        }
        dismiss
    }

    fn accepting(&self, sequence: Sequence) -> Option<ActivePanel> {
        if self.latest != Some(sequence) {
            tracing::debug!(
                "Discarding reply #{} (latest is {:?})",
                sequence,
                self.latest
            );
            return None;
        }
        if !self.state.is_loading() {
            tracing::debug!("Discarding reply #{}: panel is {:?}", sequence, self.state);
            return None;
        }
        self.panel
    }
}

/// Fixed bottom-right placement
fn panel_bounds(config: &OverlayConfig) -> Rect {
    let x = config
        .viewport_width
        .saturating_sub(config.margin)
        .saturating_sub(config.width);
    let y = config
        .viewport_height
        .saturating_sub(config.margin)
        .saturating_sub(config.max_height);
    Rect {
        x: x as i32,
        y: y as i32,
        width: config.width,
        height: config.max_height,
    }
}
