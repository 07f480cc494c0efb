use std::fmt;

use inwen_types::{Explanation, WordPair};

/// Shown for any absent or empty field
pub const PLACEHOLDER: &str = "-";

pub const LOADING_CAPTION: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub value: String,
}

/// Renderable panel content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Loading {
        caption: &'static str,
    },
    Explanation {
        title: String,
        sections: Vec<Section>,
    },
    Error {
        message: String,
    },
}

impl PanelView {
    pub fn loading() -> Self {
        PanelView::Loading {
            caption: LOADING_CAPTION,
        }
    }

    pub fn explanation(explanation: &Explanation) -> Self {
        let sections = vec![
            Section {
                label: "Meaning in Context",
                value: or_placeholder(explanation.context_meaning.as_deref()),
            },
            Section {
                label: "Sentence Translation",
                value: or_placeholder(explanation.translation.as_deref()),
            },
            Section {
                label: "Etymology",
                value: or_placeholder(explanation.etymology.as_deref()),
            },
            Section {
                label: "Synonyms",
                value: render_word_list(&explanation.synonyms),
            },
            Section {
                label: "Antonyms",
                value: render_word_list(&explanation.antonyms),
            },
        ];

        PanelView::Explanation {
            title: or_placeholder(Some(explanation.word.as_str())),
            sections,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        PanelView::Error {
            message: message.into(),
        }
    }

    /// Value of a labelled section, if this is an explanation view
    pub fn section(&self, label: &str) -> Option<&str> {
        match self {
            PanelView::Explanation { sections, .. } => sections
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.as_str()),
            _ => None,
        }
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// "jog (慢跑), sprint" or the placeholder for an empty list
pub fn render_word_list(list: &[WordPair]) -> String {
    if list.is_empty() {
        return PLACEHOLDER.to_string();
    }

    list.iter()
        .map(|item| match item.translation() {
            Some(translation) => format!("{} ({})", item.word(), translation),
            None => item.word().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelView::Loading { caption } => write!(f, "... {caption}"),
            PanelView::Explanation { title, sections } => {
                writeln!(f, "{title}")?;
                write!(f, "{}", "=".repeat(title.chars().count().max(1)))?;
                for section in sections {
                    write!(f, "\n\n{}\n{}", section.label.to_uppercase(), section.value)?;
                }
                Ok(())
            }
            PanelView::Error { message } => write!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_mixes_shapes() {
        let list = vec![WordPair::pair("jog", "慢跑"), WordPair::Plain("sprint".into())];
        assert_eq!(render_word_list(&list), "jog (慢跑), sprint");
        assert_eq!(render_word_list(&[]), PLACEHOLDER);
    }

    #[test]
    fn test_absent_fields_render_placeholder() {
        let view = PanelView::explanation(&Explanation {
            word: "run".into(),
            translation: Some("  ".into()),
            ..Default::default()
        });
        assert_eq!(view.section("Meaning in Context"), Some(PLACEHOLDER));
        assert_eq!(view.section("Sentence Translation"), Some(PLACEHOLDER));
        assert_eq!(view.section("Synonyms"), Some(PLACEHOLDER));
        assert_eq!(view.section("Antonyms"), Some(PLACEHOLDER));
    }

    #[test]
    fn test_missing_word_still_has_title() {
        match PanelView::explanation(&Explanation::default()) {
            PanelView::Explanation { title, .. } => assert_eq!(title, PLACEHOLDER),
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_text_form() {
        let text = PanelView::explanation(&Explanation {
            word: "run".into(),
            etymology: Some("Old English".into()),
            ..Default::default()
        })
        .to_string();
        assert!(text.starts_with("run\n==="));
        assert!(text.contains("ETYMOLOGY\nOld English"));
        assert_eq!(PanelView::error("boom").to_string(), "Error: boom");
    }
}
