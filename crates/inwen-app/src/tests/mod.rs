mod background_tests;
mod page_flow_tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use inwen_config::overlay::OverlayConfig;
use inwen_config::{MemorySettings, Settings, SettingsStore};
use inwen_core::SelectionValidator;
use inwen_dispatcher::{Dispatch, LookupError};
use inwen_lang_english::EnglishTagger;
use inwen_overlay::{HeadlessSurface, OverlayController};
use inwen_types::{Explanation, LookupRequest, PageMessage, WordPair};
use kanal::AsyncReceiver;

use crate::page::PageContext;

/// Dispatch stub: answers after a per-term delay, fails for terms listed in
/// `failures`
#[derive(Default)]
pub(crate) struct ScriptedDispatch {
    delays: HashMap<String, Duration>,
    failures: HashMap<String, LookupError>,
    pub calls: AtomicUsize,
}

impl ScriptedDispatch {
    pub fn delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    pub fn fail(mut self, term: &str, error: LookupError) -> Self {
        self.failures.insert(term.to_string(), error);
        self
    }
}

#[async_trait::async_trait]
impl Dispatch for ScriptedDispatch {
    async fn dispatch(&self, request: LookupRequest) -> Result<Explanation, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&request.term) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.failures.get(&request.term) {
            return Err(error.clone());
        }
        Ok(explanation_for(&request.term))
    }
}

pub(crate) fn explanation_for(term: &str) -> Explanation {
    Explanation {
        word: term.to_string(),
        context_meaning: Some(format!("'{term}' as used here")),
        translation: Some("他喜歡每天早上跑步。".to_string()),
        etymology: None,
        synonyms: vec![WordPair::pair("jog", "慢跑"), WordPair::Plain("sprint".into())],
        antonyms: vec![],
    }
}

pub(crate) fn page(requests: kanal::AsyncSender<PageMessage>) -> PageContext<HeadlessSurface> {
    let settings: Arc<dyn SettingsStore> = Arc::new(MemorySettings::new(Settings::default()));
    let validator = SelectionValidator::new(Arc::new(EnglishTagger::new()), settings, "zh-TW");
    PageContext::new(
        validator,
        OverlayController::new(HeadlessSurface::new(), &OverlayConfig::default()),
        requests,
    )
}

/// Receive with a deadline so a broken pipeline fails instead of hanging
pub(crate) async fn recv<T>(rx: &AsyncReceiver<T>) -> T {
    match tokio::time::timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout waiting for channel"),
    }
}
