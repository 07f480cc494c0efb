use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use inwen_types::{LookupReply, LookupRequest, PageMessage};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::{ScriptedDispatch, recv};
use crate::background::background_loop;

fn message(term: &str, sequence: u64) -> PageMessage {
    PageMessage::lookup(
        LookupRequest {
            term: term.to_string(),
            context: format!("They {term} to the station."),
            source_url: "https://example.com".to_string(),
            locale: "en-US".to_string(),
        },
        sequence,
    )
}

#[tokio::test]
async fn test_one_response_per_request() {
    let (request_tx, request_rx) = kanal::bounded_async(16);
    let (reply_tx, reply_rx) = kanal::bounded_async(16);
    let dispatcher = Arc::new(
        ScriptedDispatch::default()
            .delay("walk", Duration::from_millis(50))
            .delay("run", Duration::from_millis(10)),
    );
    let task = tokio::spawn(background_loop(
        dispatcher,
        request_rx,
        reply_tx,
        Duration::from_secs(2),
        CancellationToken::new(),
    ));

    for (sequence, term) in ["walk", "run", "go"].into_iter().enumerate() {
        request_tx
            .send(message(term, sequence as u64 + 1))
            .await
            .unwrap();
    }
    drop(request_tx);

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let response = recv(&reply_rx).await;
        let LookupReply::Ok(explanation) = &response.reply else {
            panic!("unexpected reply: {:?}", response.reply);
        };
        let expected = match response.sequence {
            1 => "walk",
            2 => "run",
            3 => "go",
            other => panic!("unknown sequence {other}"),
        };
        assert_eq!(explanation.word, expected);
        assert!(seen.insert(response.sequence), "duplicate reply");
    }

    // Loop drains in-flight lookups, then exits once requests are closed
    timeout(Duration::from_secs(2), task)
        .await
        .expect("background loop should exit")
        .unwrap()
        .unwrap();
    assert!(reply_rx.recv().await.is_err());
}

#[tokio::test]
async fn test_hanging_lookup_times_out() {
    let (request_tx, request_rx) = kanal::bounded_async(16);
    let (reply_tx, reply_rx) = kanal::bounded_async(16);
    let dispatcher = Arc::new(ScriptedDispatch::default().delay("run", Duration::from_secs(30)));
    let cancel = CancellationToken::new();
    tokio::spawn(background_loop(
        dispatcher,
        request_rx,
        reply_tx,
        Duration::from_millis(100),
        cancel.clone(),
    ));

    request_tx.send(message("run", 7)).await.unwrap();
    let response = recv(&reply_rx).await;
    assert_eq!(response.sequence, 7);
    match response.reply {
        LookupReply::Err(message) => assert!(message.contains("timed out"), "{message}"),
        other => panic!("unexpected reply: {other:?}"),
    }

    cancel.cancel();
}

#[tokio::test]
async fn test_cancel_stops_loop() {
    let (_request_tx, request_rx) = kanal::bounded_async::<PageMessage>(16);
    let (reply_tx, _reply_rx) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();
    let task = tokio::spawn(background_loop(
        Arc::new(ScriptedDispatch::default()),
        request_rx,
        reply_tx,
        Duration::from_secs(1),
        cancel.clone(),
    ));

    cancel.cancel();
    let result = timeout(Duration::from_secs(2), task)
        .await
        .expect("background loop should stop");
    assert!(result.unwrap().is_ok());
}
