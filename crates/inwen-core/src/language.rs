use std::fmt;

/// Linguistic tagging capability for a language implementation.
///
/// Implementations are pure: no I/O, no shared mutable state.
pub trait Tagger: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Break text into lexical terms
    fn tokenize(&self, text: &str) -> Vec<Term>;

    /// Whether any term of `text` can carry `tag`
    fn tag_has(&self, text: &str, tag: Tag) -> bool;

    /// Number of sentences in `text`
    fn sentence_count(&self, text: &str) -> usize;

    /// Whether any term of `text` carries one of `tags`
    fn tag_has_any(&self, text: &str, tags: &[Tag]) -> bool {
        tags.iter().any(|tag| self.tag_has(text, *tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub surface: String,
    /// Lowercased surface with edge punctuation removed
    pub normalized: String,
    /// Byte offset of `surface` in the tokenized text
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
}

impl Tag {
    /// Classes a selected word must belong to before it is worth explaining
    pub const CONTENT_CLASSES: [Tag; 6] = [
        Tag::Noun,
        Tag::Verb,
        Tag::Adjective,
        Tag::Adverb,
        Tag::Pronoun,
        Tag::Determiner,
    ];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Noun => "Noun",
            Tag::Verb => "Verb",
            Tag::Adjective => "Adjective",
            Tag::Adverb => "Adverb",
            Tag::Pronoun => "Pronoun",
            Tag::Determiner => "Determiner",
            Tag::Preposition => "Preposition",
            Tag::Conjunction => "Conjunction",
            Tag::Interjection => "Interjection",
        };
        f.write_str(name)
    }
}
