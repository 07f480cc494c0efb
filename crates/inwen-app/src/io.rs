//! Stdin gesture source.
//!
//! One line per gesture: `word | paragraph` is a double-click on `word`
//! inside `paragraph`, a bare `word` is a double-click with no enclosing
//! block. Lines starting with `:` are commands.

use std::sync::Arc;

use inwen_core::Selection;
use inwen_overlay::{InputEvent, Key, Point};
use inwen_types::Provider;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::PageEvent;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Page(PageEvent),
    SetEnabled(bool),
    SetProvider(Provider),
}

pub fn parse_command(line: &str, source_url: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    if let Some(command) = line.trim().strip_prefix(':') {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let command = match name {
            "esc" => Command::Page(PageEvent::Input(InputEvent::KeyDown(Key::Escape))),
            // Origin is never inside the bottom-right panel
            "click" => Command::Page(PageEvent::Input(InputEvent::PointerDown(Point {
                x: 0,
                y: 0,
            }))),
            "close" => Command::Page(PageEvent::Input(InputEvent::CloseButton)),
            "enable" => Command::SetEnabled(true),
            "disable" => Command::SetEnabled(false),
            "provider" => {
                let provider = parts
                    .next()
                    .ok_or_else(|| "usage: :provider primary|secondary".to_string())?
                    .parse::<Provider>()?;
                Command::SetProvider(provider)
            }
            "quit" | "q" => Command::Page(PageEvent::Quit),
            other => return Err(format!("unknown command ':{other}'")),
        };
        return Ok(Some(command));
    }

    let selection = match line.split_once('|') {
        Some((text, block)) => Selection::new(text, block, source_url),
        None => Selection {
            text: line.to_string(),
            block_text: None,
            source_url: source_url.to_string(),
        },
    };
    Ok(Some(Command::Page(PageEvent::Selection(selection))))
}

pub async fn stdin_io(
    state: Arc<AppState>,
    source_url: String,
    cancel: CancellationToken,
    event_tx: AsyncSender<PageEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("[STDIN] Reading gestures");
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => return Ok(()),
        };

        let Some(line) = line else {
            // Lookups already in flight still get their panels
            tracing::info!("[STDIN] Input closed, press Ctrl+C to exit");
            cancel.cancelled().await;
            return Ok(());
        };

        let command = match parse_command(&line, &source_url) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("[STDIN] {}", e);
                continue;
            }
        };

        match command {
            Command::Page(event) => {
                let quit = matches!(event, PageEvent::Quit);
                event_tx.send(event).await?;
                if quit {
                    return Ok(());
                }
            }
            Command::SetEnabled(enabled) => {
                if let Err(e) = state.settings.set_enabled(enabled) {
                    tracing::error!("[STDIN] Failed to save enabled state: {}", e);
                }
            }
            Command::SetProvider(provider) => {
                if let Err(e) = state.settings.set_provider(provider) {
                    tracing::error!("[STDIN] Failed to save provider: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/story";

    fn selection(line: &str) -> Selection {
        match parse_command(line, URL) {
            Ok(Some(Command::Page(PageEvent::Selection(selection)))) => selection,
            other => panic!("expected a selection, got {other:?}"),
        }
    }

    #[test]
    fn test_word_with_context() {
        let selection = selection("run | They run every morning.");
        assert_eq!(selection.text, "run ");
        assert_eq!(selection.block_text.as_deref(), Some(" They run every morning."));
        assert_eq!(selection.source_url, URL);
    }

    #[test]
    fn test_bare_word_has_no_block() {
        assert_eq!(selection("run").block_text, None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_command(":esc", URL),
            Ok(Some(Command::Page(PageEvent::Input(InputEvent::KeyDown(
                Key::Escape
            )))))
        );
        assert_eq!(
            parse_command(":close", URL),
            Ok(Some(Command::Page(PageEvent::Input(InputEvent::CloseButton))))
        );
        assert_eq!(parse_command(":disable", URL), Ok(Some(Command::SetEnabled(false))));
        assert_eq!(
            parse_command(":provider openrouter", URL),
            Ok(Some(Command::SetProvider(Provider::Secondary)))
        );
        assert_eq!(
            parse_command(" :quit ", URL),
            Ok(Some(Command::Page(PageEvent::Quit)))
        );
        assert_eq!(parse_command("   ", URL), Ok(None));
    }

    #[test]
    fn test_bad_commands() {
        assert!(parse_command(":provider", URL).is_err());
        assert!(parse_command(":provider bing", URL).is_err());
        assert!(parse_command(":reload", URL).is_err());
    }
}
