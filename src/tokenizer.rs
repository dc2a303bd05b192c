use fancy_regex::Regex;
use lazy_static::lazy_static;

// One alternative per token class: a run of letters, a run of digits, or a
// single punctuation mark. Input is lowercased before matching, so `[a-z]+`
// covers all ASCII letters. Everything the pattern does not match
// (whitespace, unsupported symbols, non-ASCII) produces no token.
const TOKEN_PATTERN: &str = r#"[a-z]+|[0-9]+|[.,!?;:"'()\[\]{}-]"#;

lazy_static! {
    static ref COMPILED_TOKEN_PATTERN: Regex = Regex::new(TOKEN_PATTERN).unwrap();
}

/// Splits text into lowercase word, number and punctuation tokens.
#[derive(Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize `text` into an ordered list of tokens. Cannot fail; empty
    /// input yields an empty list.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        COMPILED_TOKEN_PATTERN
            .find_iter(&lowered)
            .filter_map(|m| m.ok())
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Pipe-separated rendering of the token sequence, for display.
    pub fn tokenize_and_format(&self, text: &str) -> String {
        self.tokenize(text).join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn splits_words_and_punctuation() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("Hello, world!"),
            vec!["hello", ",", "world", "!"]
        );
    }

    #[test]
    fn digit_runs_stay_single_tokens() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(tokenizer.tokenize("in 2023 it rained"), vec!["in", "2023", "it", "rained"]);
        assert_eq!(tokenizer.tokenize("abc123"), vec!["abc", "123"]);
    }

    #[test]
    fn whitespace_and_unsupported_symbols_are_skipped() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("  \t\n  ").is_empty());
        assert!(tokenizer.tokenize("@ # $ % ^ &").is_empty());
        // Non-ASCII letters fall outside the pattern entirely.
        assert_eq!(tokenizer.tokenize("café"), vec!["caf"]);
    }

    #[test]
    fn bracket_pairs_are_individual_tokens() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("(a) [b] {c}"),
            vec!["(", "a", ")", "[", "b", "]", "{", "c", "}"]
        );
    }

    #[test]
    fn tokenizing_is_idempotent_under_lowercasing() {
        let tokenizer = WordTokenizer::new();
        let text = "The QUICK brown Fox; 42 times!";
        assert_eq!(
            tokenizer.tokenize(text),
            tokenizer.tokenize(&text.to_lowercase())
        );
    }

    #[test]
    fn format_joins_with_pipes() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(tokenizer.tokenize_and_format("Hi, there"), "hi | , | there");
    }
}
