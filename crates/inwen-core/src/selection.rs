//! Decides whether a double-clicked selection deserves a lookup.
//!
//! Rejections are silent: they are logged at debug level and produce no
//! overlay, no network call and no error for the user.

use std::fmt;
use std::sync::Arc;

use inwen_config::SettingsStore;
use inwen_types::LookupRequest;

use crate::language::{Tag, Tagger};
use crate::preprocess::{BlockTextPreprocessor, Preprocessor};

/// A text selection as reported by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    /// Text of the nearest block-level ancestor of the selection anchor,
    /// `None` when the anchor has no enclosing element
    pub block_text: Option<String>,
    pub source_url: String,
}

impl Selection {
    pub fn new(
        text: impl Into<String>,
        block_text: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            block_text: Some(block_text.into()),
            source_url: source_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Disabled,
    /// Selection is not exactly one term
    TermCount(usize),
    ContainsDigit,
    NoLetters,
    /// Not taggable as any content word class
    NotAWord,
    MissingContext,
    ContextTooShort,
    NoSentence,
    ContextLacksVerbOrNoun,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty selection"),
            Rejection::Disabled => write!(f, "extension disabled"),
            Rejection::TermCount(n) => write!(f, "selection has {n} terms"),
            Rejection::ContainsDigit => write!(f, "selection contains a digit"),
            Rejection::NoLetters => write!(f, "selection has no letters"),
            Rejection::NotAWord => write!(f, "selection is not a recognizable word"),
            Rejection::MissingContext => write!(f, "no enclosing block text"),
            Rejection::ContextTooShort => write!(f, "context has a single term"),
            Rejection::NoSentence => write!(f, "context has no sentence"),
            Rejection::ContextLacksVerbOrNoun => write!(f, "context lacks a verb or a noun"),
        }
    }
}

pub struct SelectionValidator {
    tagger: Arc<dyn Tagger>,
    settings: Arc<dyn SettingsStore>,
    locale: String,
}

impl SelectionValidator {
    pub fn new(
        tagger: Arc<dyn Tagger>,
        settings: Arc<dyn SettingsStore>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            tagger,
            settings,
            locale: locale.into(),
        }
    }

    /// Build a `LookupRequest` when every check passes
    pub fn validate(&self, selection: &Selection) -> Result<LookupRequest, Rejection> {
        let result = self.check(selection);
        match &result {
            Ok(request) => tracing::debug!(
                "Selection accepted: '{}' ({} chars of context)",
                request.term,
                request.context.len()
            ),
            Err(rejection) => {
                tracing::debug!("Selection '{}' skipped: {}", selection.text.trim(), rejection)
            }
        }
        result
    }

    fn check(&self, selection: &Selection) -> Result<LookupRequest, Rejection> {
        let term = selection.text.trim();
        if term.is_empty() {
            return Err(Rejection::Empty);
        }

        if !self.settings.get().is_enabled() {
            return Err(Rejection::Disabled);
        }

        self.check_word(term)?;
        let context = self.check_context(selection.block_text.as_deref())?;

        Ok(LookupRequest {
            term: term.to_string(),
            context,
            source_url: selection.source_url.clone(),
            locale: self.locale.clone(),
        })
    }

    fn check_word(&self, term: &str) -> Result<(), Rejection> {
        let count = self.tagger.tokenize(term).len();
        if count != 1 {
            return Err(Rejection::TermCount(count));
        }

        // Version strings, codes, time zones
        if term.chars().any(char::is_numeric) {
            return Err(Rejection::ContainsDigit);
        }

        if !term.chars().any(char::is_alphabetic) {
            return Err(Rejection::NoLetters);
        }

        if !self.tagger.tag_has_any(term, &Tag::CONTENT_CLASSES) {
            return Err(Rejection::NotAWord);
        }

        Ok(())
    }

    fn check_context(&self, block_text: Option<&str>) -> Result<String, Rejection> {
        let context = block_text
            .map(|text| BlockTextPreprocessor.process(text))
            .filter(|text| !text.is_empty())
            .ok_or(Rejection::MissingContext)?;

        let analysis = BlockTextPreprocessor.analysis_form(&context);

        if self.tagger.tokenize(&analysis).len() <= 1 {
            return Err(Rejection::ContextTooShort);
        }

        let sentences = self.tagger.sentence_count(&analysis);
        if sentences == 0 {
            return Err(Rejection::NoSentence);
        }

        if !(self.tagger.tag_has(&analysis, Tag::Verb) && self.tagger.tag_has(&analysis, Tag::Noun))
        {
            return Err(Rejection::ContextLacksVerbOrNoun);
        }

        tracing::debug!("Context validation passed: {} sentences", sentences);
        Ok(context)
    }
}
