use std::fmt::Write as _;

use log::warn;

use crate::base::TokenId;
use crate::vocab::Vocabulary;

/// Reconstructs text from token IDs.
///
/// Joining tokens with plain spaces would yield "hello , world", so the
/// decoder applies a spacing heuristic around punctuation instead. The
/// result approximates the original text; casing and exact spacing are
/// already gone by construction.
pub struct Decoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> Decoder<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Decoder { vocab }
    }

    /// Decode `ids` into text.
    ///
    /// Padding IDs are dropped entirely and never count as the previous
    /// token. A separating space is emitted unless the token is the first
    /// one, follows opening punctuation, or is itself punctuation. A word
    /// after closing punctuation always gets a space ("end." then "start"
    /// becomes "end. start").
    pub fn decode(&self, ids: &[TokenId]) -> String {
        let mut out = String::new();
        let mut prev: Option<&str> = None;

        for &id in ids {
            if id == Vocabulary::PAD_ID {
                continue;
            }
            let token = self.vocab.token(id);

            let needs_space = match prev {
                None => false,
                Some(p) if is_opening_punctuation(p) => false,
                Some(_) => !is_punctuation(token),
            };
            if needs_space {
                out.push(' ');
            }

            out.push_str(token);
            prev = Some(token);
        }

        out.trim().to_string()
    }

    /// Decode a whitespace-separated string of decimal IDs. Entries that do
    /// not parse as integers are skipped with a warning; decoding proceeds
    /// with the rest.
    pub fn decode_from_string(&self, ids_string: &str) -> String {
        let ids: Vec<TokenId> = ids_string
            .split_whitespace()
            .filter_map(|part| match part.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("invalid ID '{part}' - skipping");
                    None
                }
            })
            .collect();

        self.decode(&ids)
    }

    /// Multi-line rendering resolving every entry of `ids_string`, marking
    /// reserved and out-of-vocabulary IDs, followed by the decoded text.
    pub fn decode_with_details(&self, ids_string: &str) -> String {
        if ids_string.trim().is_empty() {
            return "No IDs provided".to_string();
        }

        let mut ids = Vec::new();
        let mut out = String::new();
        let _ = writeln!(out, "ID -> Token mapping:");

        for part in ids_string.split_whitespace() {
            match part.parse::<TokenId>() {
                Ok(id) => {
                    ids.push(id);
                    let token = self.vocab.token(id);
                    let marker = if id == Vocabulary::PAD_ID {
                        " [PAD]"
                    } else if id == Vocabulary::UNK_ID {
                        " [UNK]"
                    } else if !self.vocab.contains_id(id) {
                        " [INVALID]"
                    } else {
                        ""
                    };
                    let _ = writeln!(out, "  {id} -> '{token}'{marker}");
                }
                Err(_) => {
                    let _ = writeln!(out, "  '{part}' -> [INVALID - not a number]");
                }
            }
        }

        let _ = write!(out, "\nDecoded text: {}", self.decode(&ids));
        out
    }
}

/// A token is punctuation iff it is a single non-alphanumeric character.
fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if !c.is_alphanumeric()
    )
}

/// Marks that attach to the token AFTER them: no space is emitted between
/// an opener and what follows it.
fn is_opening_punctuation(token: &str) -> bool {
    matches!(token, "(" | "[" | "{" | "\"" | "'")
}
