//! Part-of-speech lookups against the OpenGloss English lexicon.

use inwen_core::Tag;
use opengloss_rs::LexemeIndex;

use crate::lexicon;

/// Map a lexicon part-of-speech label onto a tag
pub fn pos_tag(label: &str) -> Option<Tag> {
    let label = label.trim().to_ascii_lowercase().replace(['_', '-'], " ");
    let tag = match label.as_str() {
        "noun" | "proper noun" | "name" => Tag::Noun,
        "verb" | "auxiliary verb" | "modal verb" | "phrasal verb" => Tag::Verb,
        "adjective" | "adj" => Tag::Adjective,
        "adverb" | "adv" => Tag::Adverb,
        "pronoun" => Tag::Pronoun,
        "determiner" | "article" => Tag::Determiner,
        "preposition" | "postposition" => Tag::Preposition,
        "conjunction" => Tag::Conjunction,
        "interjection" => Tag::Interjection,
        _ => return None,
    };
    Some(tag)
}

/// Tags of the lexeme spelled exactly `word`, empty when it is not listed
pub fn lexeme_tags(word: &str) -> Vec<Tag> {
    let Some(entry) = LexemeIndex::entry_by_word(word) else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for tag in entry.parts_of_speech().filter_map(pos_tag) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Whether `word` is an inflection of a lexicon verb: "flows" from "flow",
/// "hires" from "hire", "melted" from "melt".
pub fn is_verb_inflection(word: &str) -> bool {
    lexicon::base_candidates(word).iter().any(|stem| {
        LexemeIndex::entry_by_word(stem).is_some_and(|entry| {
            entry.parts_of_speech().any(|pos| pos_tag(pos) == Some(Tag::Verb))
                && lists_inflection(&entry.all_inflections().collect::<Vec<_>>(), word)
        })
    })
}

/// Entries without inflection data are trusted on the suffix rules alone
fn lists_inflection(inflections: &[&str], word: &str) -> bool {
    inflections.is_empty()
        || inflections.iter().any(|form| {
            form.split(|c: char| !c.is_alphabetic())
                .any(|part| part.eq_ignore_ascii_case(word))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_labels() {
        assert_eq!(pos_tag("verb"), Some(Tag::Verb));
        assert_eq!(pos_tag("Noun"), Some(Tag::Noun));
        assert_eq!(pos_tag("proper_noun"), Some(Tag::Noun));
        assert_eq!(pos_tag(" adjective "), Some(Tag::Adjective));
        assert_eq!(pos_tag("article"), Some(Tag::Determiner));
        assert_eq!(pos_tag("numeral"), None);
        assert_eq!(pos_tag("suffix"), None);
    }

    #[test]
    fn test_inflection_lists() {
        assert!(lists_inflection(&["flows", "flowed", "flowing"], "flows"));
        assert!(lists_inflection(&["hires (third-person singular)"], "hires"));
        assert!(lists_inflection(&[], "purrs"));
        assert!(!lists_inflection(&["melted", "melting"], "melts"));
    }

    #[test]
    fn test_common_lexemes() {
        assert!(lexeme_tags("river").contains(&Tag::Noun));
        assert!(lexeme_tags("melt").contains(&Tag::Verb));
        assert!(lexeme_tags("qzxv").is_empty());
    }
}
