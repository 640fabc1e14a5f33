//! Line tokenizer for the command console.
//!
//! Splits one input line into whitespace-delimited words, honoring double
//! quotes so an argument can carry embedded spaces. The returned slices
//! borrow from the input line, so they stay valid exactly as long as the
//! line buffer does - the console rebuilds them fresh for every line.

use crate::compat::Vec;

/// Whitespace as the console understands it.
fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r' || b == b'\n'
}

/// Split `line` into at most `max_words` words.
///
/// Rules:
/// - runs of whitespace separate words and are otherwise ignored;
/// - a `"` opens a quoted word only when at least one character follows it
///   (a lone trailing quote is an ordinary character);
/// - a quoted word ends at the next `"` or at end of input - an unterminated
///   quote simply consumes the rest of the line;
/// - once `max_words` words have been collected the rest of the line is
///   dropped silently.
///
/// All-whitespace or empty input yields an empty list.
pub fn tokenize(line: &str, max_words: usize) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && is_space(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() || words.len() == max_words {
            break;
        }

        if bytes[i] == b'"' && i + 1 < bytes.len() {
            // Quoted word: skip the opening quote, take everything up to
            // the closing quote (or end of line), then skip the close.
            i += 1;
            let start = i;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            words.push(&line[start..i]);
            if i < bytes.len() {
                i += 1;
            }
        } else {
            let start = i;
            while i < bytes.len() && !is_space(bytes[i]) {
                i += 1;
            }
            words.push(&line[start..i]);
            if i < bytes.len() {
                i += 1;
            }
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words_with_extra_whitespace() {
        let words = tokenize("  time  12 0 0 ", 8);
        assert_eq!(words, ["time", "12", "0", "0"]);
    }

    #[test]
    fn test_quoted_word_keeps_embedded_spaces() {
        let words = tokenize("set \"hello world\" now", 8);
        assert_eq!(words, ["set", "hello world", "now"]);
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert!(tokenize("", 8).is_empty());
        assert!(tokenize(" \t \r\n ", 8).is_empty());
    }

    #[test]
    fn test_word_limit_truncates_silently() {
        let words = tokenize("a b c d e f", 4);
        assert_eq!(words, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_lone_trailing_quote_is_an_ordinary_character() {
        // No lookahead character after the quote, so quote mode never opens.
        let words = tokenize("foo \"", 8);
        assert_eq!(words, ["foo", "\""]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let words = tokenize("\"unterminated hello", 8);
        assert_eq!(words, ["unterminated hello"]);
    }

    #[test]
    fn test_adjacent_quoted_and_plain_words() {
        // Only the closing quote is consumed; the next word starts right after.
        let words = tokenize("\"a\"b", 8);
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn test_quote_inside_a_word_is_not_special() {
        let words = tokenize("ab\"cd", 8);
        assert_eq!(words, ["ab\"cd"]);
    }

    #[test]
    fn test_tabs_and_crlf_as_separators() {
        let words = tokenize("time\t12\r\n0", 8);
        assert_eq!(words, ["time", "12", "0"]);
    }
}
