//! Draws the overlay panel as a text box on a writer (stdout in the binary).

use std::io::Write;

use inwen_overlay::{Listener, PanelId, PanelView, Rect, Surface};

/// Columns inside the box borders
const INNER_WIDTH: usize = 44;

/// Title bar with the close control, `:close` activates it
const HEADER: &str = "inwen [x]";

pub struct TerminalSurface<W: Write> {
    out: W,
    mounted: Option<PanelId>,
    listeners: Vec<Listener>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            mounted: None,
            listeners: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, view: &PanelView) -> std::io::Result<()> {
        let border = format!("+{}+", "-".repeat(INNER_WIDTH + 2));

        writeln!(self.out, "{border}")?;
        writeln!(self.out, "| {:<width$} |", HEADER, width = INNER_WIDTH)?;
        writeln!(self.out, "{border}")?;
        for line in view.to_string().lines() {
            for chunk in wrap(line, INNER_WIDTH) {
                let pad = INNER_WIDTH.saturating_sub(chunk.chars().count());
                writeln!(self.out, "| {}{} |", chunk, " ".repeat(pad))?;
            }
        }
        writeln!(self.out, "{border}")?;
        self.out.flush()
    }
}

/// Break `line` into pieces of at most `width` characters, preferring spaces
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        let separator = usize::from(!current.is_empty());
        let needed = current.chars().count() + separator + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn mount(&mut self, id: PanelId, bounds: Rect) {
        tracing::debug!(
            "Panel {:?} at ({}, {}) {}x{}",
            id,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
        self.mounted = Some(id);
    }

    fn render(&mut self, id: PanelId, view: &PanelView) {
        if self.mounted != Some(id) {
            return;
        }
        if let Err(e) = self.draw(view) {
            tracing::error!("Failed to draw panel: {}", e);
        }
    }

    fn unmount(&mut self, id: PanelId) {
        if self.mounted == Some(id) {
            self.mounted = None;
            if let Err(e) = writeln!(self.out, "(panel closed)").and_then(|_| self.out.flush()) {
                tracing::error!("Failed to draw panel: {}", e);
            }
        }
    }

    fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        self.listeners.retain(|l| *l != listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_draws_only_mounted_panel() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.render(PanelId(1), &PanelView::loading());
        assert!(output(surface).is_empty());

        let mut surface = TerminalSurface::new(Vec::new());
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 320,
            height: 500,
        };
        surface.mount(PanelId(1), bounds);
        surface.render(PanelId(1), &PanelView::loading());
        surface.unmount(PanelId(1));
        let text = output(surface);
        assert!(text.contains("| inwen [x]"));
        assert!(text.contains("| ... Analyzing..."));
        assert!(text.ends_with("(panel closed)\n"));
    }

    #[test]
    fn test_error_panel_has_close_control() {
        let mut surface = TerminalSurface::new(Vec::new());
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 320,
            height: 120,
        };
        surface.mount(PanelId(7), bounds);
        surface.render(PanelId(7), &PanelView::error("HTTP error! status: 500"));
        let text = output(surface);
        assert!(text.contains("inwen [x]"));
        assert!(text.contains("Error: HTTP error! status: 500"));
    }

    #[test]
    fn test_wrap_long_lines() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 3), vec![""]);
    }
}
