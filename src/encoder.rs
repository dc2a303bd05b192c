use std::fmt::Write as _;

use crate::base::TokenId;
use crate::tokenizer::WordTokenizer;
use crate::vocab::Vocabulary;

/// Maps text to token IDs by composing the tokenizer with a trained
/// vocabulary. Tokens the vocabulary has never seen encode to the unknown
/// ID, so encoding never fails but is lossy for unseen words.
pub struct Encoder<'a> {
    tokenizer: &'a WordTokenizer,
    vocab: &'a Vocabulary,
}

impl<'a> Encoder<'a> {
    pub fn new(tokenizer: &'a WordTokenizer, vocab: &'a Vocabulary) -> Self {
        Encoder { tokenizer, vocab }
    }

    /// Encode `text` into the ID of each of its tokens, in order.
    pub fn encode(&self, text: &str) -> Vec<TokenId> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|token| self.vocab.token_id(token))
            .collect()
    }

    /// Multi-line rendering pairing every token with its ID, flagging the
    /// ones that fell back to the unknown token.
    pub fn encode_with_details(&self, text: &str) -> String {
        let tokens = self.tokenizer.tokenize(text);
        let ids = self.encode(text);

        let mut out = String::new();
        let _ = writeln!(out, "Tokens: {tokens:?}");
        let _ = writeln!(out, "IDs:    {ids:?}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Token -> ID mapping:");
        for (token, id) in tokens.iter().zip(&ids) {
            let marker = if *id == Vocabulary::UNK_ID {
                " [UNKNOWN]"
            } else {
                ""
            };
            let _ = writeln!(out, "  '{token}' -> {id}{marker}");
        }
        out
    }

    /// Space-joined decimal IDs, the shape `decode_from_string` accepts.
    pub fn encode_to_string(&self, text: &str) -> String {
        self.encode(text)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
