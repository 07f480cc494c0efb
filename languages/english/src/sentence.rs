/// Split text into sentences at terminal punctuation followed by
/// whitespace or end of text. A trailing fragment without a terminator still
/// counts; fragments without any letter do not.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        // Swallow runs like "?!" or "..."
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if is_terminal(next) || is_closing(next) {
                end = next_idx + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if fragment.chars().any(char::is_alphabetic) {
        sentences.push(fragment);
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…' | '。' | '！' | '？')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let text = "He likes to run. Does she? Yes!";
        assert_eq!(sentences(text), vec!["He likes to run.", "Does she?", "Yes!"]);
    }

    #[test]
    fn test_unterminated_fragment_counts() {
        assert_eq!(sentences("He likes to run"), vec!["He likes to run"]);
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        assert_eq!(sentences("Version 1.5 is out."), vec!["Version 1.5 is out."]);
    }

    #[test]
    fn test_quotes_and_ellipsis() {
        let text = "\"Run!\" he said... Then he ran.";
        assert_eq!(sentences(text), vec!["\"Run!\"", "he said...", "Then he ran."]);
    }

    #[test]
    fn test_no_letters_no_sentence() {
        assert!(sentences("42 ... 17 !!").is_empty());
        assert!(sentences("").is_empty());
    }
}
