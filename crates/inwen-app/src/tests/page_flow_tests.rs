use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use inwen_core::Selection;
use inwen_dispatcher::LookupError;
use inwen_overlay::{InputEvent, Key, PanelView};
use inwen_types::{LookupReply, LookupResponse, PageMessage};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::{ScriptedDispatch, page, recv};
use crate::background::background_loop;
use crate::events::{PageEvent, page_loop};
use crate::page::UNKNOWN_ERROR;

const URL: &str = "https://example.com/post";

fn double_click(word: &str) -> Selection {
    Selection::new(word, format!("He likes to {word} every morning."), URL)
}

#[tokio::test]
async fn test_run_lookup_renders_synonym_pairs() {
    let (request_tx, request_rx) = kanal::bounded_async(16);
    let (reply_tx, reply_rx) = kanal::bounded_async(16);
    let dispatcher = Arc::new(ScriptedDispatch::default());
    let cancel = CancellationToken::new();
    tokio::spawn(background_loop(
        dispatcher.clone(),
        request_rx,
        reply_tx,
        Duration::from_secs(2),
        cancel.clone(),
    ));

    let mut page = page(request_tx);
    let sequence = page.on_selection(&double_click("run")).await;
    assert_eq!(sequence, Some(1));
    assert!(page.overlay().state().is_loading());
    assert_eq!(
        page.overlay().surface().current_view(),
        Some(&PanelView::loading())
    );

    let response = recv(&reply_rx).await;
    assert_eq!(response.sequence, 1);
    assert!(page.on_response(response));

    let view = page.overlay().surface().current_view().unwrap();
    assert_eq!(view.section("Synonyms"), Some("jog (慢跑), sprint"));
    assert_eq!(view.section("Antonyms"), Some("-"));
    assert_eq!(view.section("Etymology"), Some("-"));
    assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 1);

    cancel.cancel();
}

#[tokio::test]
async fn test_newer_lookup_supersedes_slow_one() {
    let (request_tx, request_rx) = kanal::bounded_async(16);
    let (reply_tx, reply_rx) = kanal::bounded_async(16);
    let dispatcher =
        Arc::new(ScriptedDispatch::default().delay("run", Duration::from_millis(200)));
    let cancel = CancellationToken::new();
    tokio::spawn(background_loop(
        dispatcher,
        request_rx,
        reply_tx,
        Duration::from_secs(2),
        cancel.clone(),
    ));

    let mut page = page(request_tx);
    assert_eq!(page.on_selection(&double_click("run")).await, Some(1));
    assert_eq!(page.on_selection(&double_click("walk")).await, Some(2));

    let first = recv(&reply_rx).await;
    assert_eq!(first.sequence, 2);
    assert!(page.on_response(first));

    let second = recv(&reply_rx).await;
    assert_eq!(second.sequence, 1);
    assert!(!page.on_response(second), "stale reply must be dropped");

    let surface = page.overlay().surface();
    assert_eq!(surface.max_panels, 1);
    assert_eq!(surface.panel_count(), 1);
    match surface.current_view() {
        Some(PanelView::Explanation { title, .. }) => assert_eq!(title, "walk"),
        other => panic!("unexpected view: {other:?}"),
    }
    assert!(
        !surface
            .history
            .iter()
            .any(|view| matches!(view, PanelView::Explanation { title, .. } if title == "run"))
    );

    cancel.cancel();
}

#[tokio::test]
async fn test_rejected_selection_sends_nothing() {
    let (request_tx, request_rx) = kanal::bounded_async::<PageMessage>(16);
    let mut page = page(request_tx);

    let selection = Selection::new("GMT+8", "The meeting starts at noon GMT+8.", URL);
    assert_eq!(page.on_selection(&selection).await, None);
    assert_eq!(page.on_selection(&double_click("of")).await, None);

    assert!(page.overlay().state().is_idle());
    assert_eq!(page.overlay().surface().panel_count(), 0);
    assert!(
        timeout(Duration::from_millis(100), request_rx.recv())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_failed_lookup_shows_error_message() {
    let (request_tx, request_rx) = kanal::bounded_async(16);
    let (reply_tx, reply_rx) = kanal::bounded_async(16);
    let dispatcher =
        Arc::new(ScriptedDispatch::default().fail("run", LookupError::http_status(502)));
    let cancel = CancellationToken::new();
    tokio::spawn(background_loop(
        dispatcher,
        request_rx,
        reply_tx,
        Duration::from_secs(2),
        cancel.clone(),
    ));

    let mut page = page(request_tx);
    page.on_selection(&double_click("run")).await;
    assert!(page.on_response(recv(&reply_rx).await));
    assert_eq!(
        page.overlay().surface().current_view(),
        Some(&PanelView::error("HTTP error! status: 502"))
    );

    cancel.cancel();
}

#[tokio::test]
async fn test_unreachable_background_shows_unknown_error() {
    let (request_tx, request_rx) = kanal::bounded_async::<PageMessage>(16);
    drop(request_rx);

    let mut page = page(request_tx);
    assert_eq!(page.on_selection(&double_click("run")).await, Some(1));
    assert_eq!(
        page.overlay().surface().current_view(),
        Some(&PanelView::error(UNKNOWN_ERROR))
    );
}

#[tokio::test]
async fn test_page_loop_reports_closed_reply_channel() {
    let (request_tx, _request_rx) = kanal::bounded_async::<PageMessage>(16);
    let (event_tx, event_rx) = kanal::bounded_async::<PageEvent>(16);
    let (reply_tx, reply_rx) = kanal::bounded_async::<LookupResponse>(16);

    let mut page = page(request_tx);
    page.on_selection(&double_click("run")).await;
    drop(reply_tx);

    let result = timeout(
        Duration::from_secs(2),
        page_loop(&mut page, event_rx, reply_rx, CancellationToken::new()),
    )
    .await
    .expect("page loop should stop");
    assert!(result.is_err());
    assert_eq!(
        page.overlay().surface().current_view(),
        Some(&PanelView::error(UNKNOWN_ERROR))
    );
    drop(event_tx);
}

#[tokio::test]
async fn test_page_loop_routes_gestures_and_replies() {
    let (request_tx, request_rx) = kanal::bounded_async::<PageMessage>(16);
    let (event_tx, event_rx) = kanal::bounded_async::<PageEvent>(16);
    let (reply_tx, reply_rx) = kanal::bounded_async::<LookupResponse>(16);

    let handle = tokio::spawn(async move {
        let mut page = page(request_tx);
        page_loop(&mut page, event_rx, reply_rx, CancellationToken::new()).await?;
        anyhow::Ok(page)
    });

    event_tx
        .send(PageEvent::Selection(double_click("run")))
        .await
        .unwrap();
    let message = recv(&request_rx).await;
    assert_eq!(message.sequence(), 1);
    let PageMessage::LookupRequest { request, .. } = message;
    assert_eq!(request.term, "run");
    assert_eq!(request.context, "He likes to run every morning.");

    reply_tx
        .send(LookupResponse {
            sequence: 1,
            reply: LookupReply::Err("Request to webhook timed out".into()),
        })
        .await
        .unwrap();
    event_tx
        .send(PageEvent::Input(InputEvent::KeyDown(Key::Escape)))
        .await
        .unwrap();
    event_tx.send(PageEvent::Quit).await.unwrap();

    let page = timeout(Duration::from_secs(2), handle)
        .await
        .expect("page loop should quit")
        .unwrap()
        .unwrap();
    let overlay = page.overlay();
    assert!(overlay.state().is_idle());
    assert_eq!(overlay.surface().panel_count(), 0);
    assert_eq!(overlay.surface().listener_count(), 0);
}
