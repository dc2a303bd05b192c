use indexmap::IndexSet;

use crate::base::TokenId;

/// Bidirectional token↔ID table.
///
/// Tokens live in one insertion-ordered set, so a token's set index IS its
/// ID: the forward and reverse mappings cannot drift apart, and IDs are
/// assigned densely in increasing order. The table is append-only; training
/// inserts tokens and the interactive phase only reads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: IndexSet<String>,
}

impl Vocabulary {
    /// Padding token, reserved at ID 0. Structural filler; dropped on decode.
    pub const PAD_TOKEN: &'static str = "<PAD>";
    pub const PAD_ID: TokenId = 0;

    /// Unknown token, reserved at ID 1. Fallback for every token or ID
    /// without a mapping.
    pub const UNK_TOKEN: &'static str = "<UNK>";
    pub const UNK_ID: TokenId = 1;

    /// Creates a vocabulary holding only the two reserved tokens.
    pub fn new() -> Self {
        let mut tokens = IndexSet::new();
        tokens.insert(Self::PAD_TOKEN.to_string());
        tokens.insert(Self::UNK_TOKEN.to_string());
        Vocabulary { tokens }
    }

    /// Inserts `token` if absent and returns its ID. Idempotent: an existing
    /// token keeps the ID it was first assigned.
    pub fn add_token(&mut self, token: String) -> TokenId {
        let (index, _) = self.tokens.insert_full(token);
        index as TokenId
    }

    /// Bulk insertion, in order. Duplicates within `tokens` are harmless.
    pub fn add_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            self.add_token(token);
        }
    }

    /// ID for `token`, or [`Self::UNK_ID`] if it was never added.
    pub fn token_id(&self, token: &str) -> TokenId {
        self.tokens
            .get_index_of(token)
            .map_or(Self::UNK_ID, |index| index as TokenId)
    }

    /// Token string for `id`, or [`Self::UNK_TOKEN`] for any ID the
    /// vocabulary never minted (negative IDs included).
    pub fn token(&self, id: TokenId) -> &str {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.tokens.get_index(index))
            .map_or(Self::UNK_TOKEN, String::as_str)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn contains_id(&self, id: TokenId) -> bool {
        usize::try_from(id).is_ok_and(|index| index < self.tokens.len())
    }

    /// Number of distinct tokens, reserved tokens included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
