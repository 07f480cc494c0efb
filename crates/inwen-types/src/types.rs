use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A validated word lookup, built once by the selection validator and
/// consumed once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// Selected text, trimmed
    pub term: String,
    /// Plain text of the enclosing block
    pub context: String,
    pub source_url: String,
    /// BCP 47 language tag of the user, e.g. `en-US`
    pub locale: String,
}

/// Which webhook endpoint answers lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    #[serde(alias = "gemini")]
    Primary,
    #[serde(alias = "openrouter")]
    Secondary,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Primary => "primary",
            Provider::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "gemini" => Ok(Provider::Primary),
            "secondary" | "openrouter" => Ok(Provider::Secondary),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Structured explanation of a word, as produced by the webhook's model.
///
/// Every field is optional on the wire. Missing or `null` values become
/// empty strings, `None` or empty lists so rendering never has to guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_meaning: Option<String>,
    /// Translation of the surrounding sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<WordPair>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<WordPair>,
}

/// Synonym or antonym entry.
///
/// Older webhook prompts returned bare strings; current ones return objects
/// carrying a translation. Both must keep rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordPair {
    Pair {
        word: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        translation: Option<String>,
    },
    Plain(String),
}

impl WordPair {
    pub fn pair(word: impl Into<String>, translation: impl Into<String>) -> Self {
        WordPair::Pair {
            word: word.into(),
            translation: Some(translation.into()),
        }
    }

    pub fn word(&self) -> &str {
        match self {
            WordPair::Pair { word, .. } => word,
            WordPair::Plain(word) => word,
        }
    }

    pub fn translation(&self) -> Option<&str> {
        match self {
            WordPair::Pair { translation, .. } => translation.as_deref(),
            WordPair::Plain(_) => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
