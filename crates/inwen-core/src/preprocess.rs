use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Plain text of a block element with whitespace runs and line breaks
    /// collapsed to single spaces. Characters are otherwise kept as written.
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// NFKC copy used for tagging only; never sent anywhere
    fn analysis_form(&self, text: &str) -> String {
        text.nfkc().collect()
    }
}

pub struct BlockTextPreprocessor;
impl Preprocessor for BlockTextPreprocessor {}
