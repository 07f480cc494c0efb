use inwen_core::{Tag, Tagger, Term};

use crate::dictionary;
use crate::lexicon;
use crate::sentence;

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ism", "ist", "ship", "hood", "dom", "ance", "ence",
    "er", "or", "age", "ure", "ery",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "able", "ible", "ive", "al", "ic", "ish", "ary", "ent", "ant", "est",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

/// English part-of-speech tagger.
///
/// Closed classes come from fixed lists, open classes from the OpenGloss
/// lexicon and its inflections. Words the lexicon does not know are guessed
/// from their suffixes and default to nouns, so the tagger errs on the side
/// of letting a selection through.
#[derive(Debug, Default, Clone)]
pub struct EnglishTagger;

impl EnglishTagger {
    pub fn new() -> Self {
        Self
    }

    /// All tags a single word may carry
    pub fn tags(&self, word: &str) -> Vec<Tag> {
        let word = word.to_lowercase();
        let word = word
            .strip_suffix("'s")
            .or_else(|| word.strip_suffix("’s"))
            .unwrap_or(&word);

        let mut tags = Vec::new();

        let closed = lexicon::closed_class(word);
        for tag in closed.unwrap_or_default() {
            push(&mut tags, *tag);
        }

        // Function words are settled by the closed lists alone
        let open_class = closed.is_none();
        if open_class {
            for tag in dictionary::lexeme_tags(word) {
                push(&mut tags, tag);
            }
        }

        if lexicon::is_inflected_verb(word) {
            push(&mut tags, Tag::Verb);
            // Bare forms and gerunds double as nouns: "a run", "the running"
            if lexicon::is_verb_base(word) || word.ends_with("ing") {
                push(&mut tags, Tag::Noun);
            }
        } else if open_class
            && !tags.contains(&Tag::Verb)
            && dictionary::is_verb_inflection(word)
        {
            push(&mut tags, Tag::Verb);
        }

        if !tags.is_empty() {
            return tags;
        }

        if word.len() > 4 && word.ends_with("ly") {
            push(&mut tags, Tag::Adverb);
        }
        if word.len() > 4 && word.ends_with("ing") {
            push(&mut tags, Tag::Verb);
            push(&mut tags, Tag::Noun);
        }
        if word.len() > 3 && word.ends_with("ed") {
            push(&mut tags, Tag::Verb);
            push(&mut tags, Tag::Adjective);
        }
        if has_suffix(word, VERB_SUFFIXES) {
            push(&mut tags, Tag::Verb);
        }
        if has_suffix(word, ADJECTIVE_SUFFIXES) {
            push(&mut tags, Tag::Adjective);
        }
        if has_suffix(word, NOUN_SUFFIXES) {
            push(&mut tags, Tag::Noun);
        }

        if lexicon::looks_third_person(word) {
            push(&mut tags, Tag::Verb);
            push(&mut tags, Tag::Noun);
        }

        if tags.is_empty() {
            tracing::trace!("No lexicon entry for '{}', tagging as noun", word);
            tags.push(Tag::Noun);
        }
        tags
    }
}

fn push(tags: &mut Vec<Tag>, tag: Tag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

/// Suffix match that leaves at least a three letter stem
fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.len() >= suffix.len() + 3 && word.ends_with(suffix))
}

impl Tagger for EnglishTagger {
    fn language_code(&self) -> &str {
        "en"
    }

    /// Whitespace separated chunks with edge punctuation trimmed. Inner
    /// apostrophes, hyphens and symbols stay, so "don't" and "GMT+8" are one
    /// term each.
    fn tokenize(&self, text: &str) -> Vec<Term> {
        text.split(char::is_whitespace)
            .filter_map(|chunk| {
                let surface = chunk.trim_matches(|c: char| !c.is_alphanumeric());
                if surface.is_empty() {
                    return None;
                }
                let position = surface.as_ptr() as usize - text.as_ptr() as usize;
                Some(Term {
                    surface: surface.to_string(),
                    normalized: surface.to_lowercase(),
                    position,
                })
            })
            .collect()
    }

    fn tag_has(&self, text: &str, tag: Tag) -> bool {
        self.tokenize(text)
            .iter()
            .filter(|term| term.surface.chars().any(char::is_alphabetic))
            .any(|term| self.tags(&term.normalized).contains(&tag))
    }

    fn sentence_count(&self, text: &str) -> usize {
        sentence::sentences(text).len()
    }
}
