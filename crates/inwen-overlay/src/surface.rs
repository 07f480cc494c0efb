//! Where the panel lives. The controller is the only caller of a `Surface`.

use crate::render::PanelView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        let right = self.x as i64 + self.width as i64;
        let bottom = self.y as i64 + self.height as i64;
        point.x >= self.x
            && point.y >= self.y
            && (point.x as i64) < right
            && (point.y as i64) < bottom
    }
}

/// Document-level listeners that exist only while a panel is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    EscapeKey,
    OutsidePointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown(Point),
    /// The panel's own close control
    CloseButton,
}

pub trait Surface {
    fn mount(&mut self, id: PanelId, bounds: Rect);

    fn render(&mut self, id: PanelId, view: &PanelView);

    fn unmount(&mut self, id: PanelId);

    fn add_listener(&mut self, listener: Listener);

    fn remove_listener(&mut self, listener: Listener);
}

/// In-memory surface that records panels and listeners
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    panels: Vec<(PanelId, Rect, Option<PanelView>)>,
    listeners: Vec<Listener>,
    /// Highest number of panels ever mounted at once
    pub max_panels: usize,
    /// Every view rendered, in order
    pub history: Vec<PanelView>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// View of the most recently mounted panel
    pub fn current_view(&self) -> Option<&PanelView> {
        self.panels.last().and_then(|(_, _, view)| view.as_ref())
    }

    pub fn current_bounds(&self) -> Option<Rect> {
        self.panels.last().map(|(_, bounds, _)| *bounds)
    }
}

impl Surface for HeadlessSurface {
    fn mount(&mut self, id: PanelId, bounds: Rect) {
        self.panels.push((id, bounds, None));
        self.max_panels = self.max_panels.max(self.panels.len());
    }

    fn render(&mut self, id: PanelId, view: &PanelView) {
        if let Some((_, _, slot)) = self.panels.iter_mut().find(|(pid, _, _)| *pid == id) {
            *slot = Some(view.clone());
            self.history.push(view.clone());
        }
    }

    fn unmount(&mut self, id: PanelId) {
        self.panels.retain(|(pid, _, _)| *pid != id);
    }

    fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        if let Some(idx) = self.listeners.iter().position(|l| *l == listener) {
            self.listeners.remove(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect {
            x: 10,
            y: 10,
            width: 5,
            height: 5,
        };
        assert!(rect.contains(Point { x: 10, y: 10 }));
        assert!(rect.contains(Point { x: 14, y: 14 }));
        assert!(!rect.contains(Point { x: 15, y: 14 }));
        assert!(!rect.contains(Point { x: 9, y: 12 }));
    }
}
