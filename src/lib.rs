//! Word-level tokenizer with a trained token↔ID vocabulary, lossy
//! encode/decode, and a Project Gutenberg corpus fetcher.

pub mod base;
pub mod corpus;
pub mod decoder;
pub mod encoder;
pub mod tokenizer;
pub mod vocab;

pub use base::TokenId;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use tokenizer::WordTokenizer;
pub use vocab::Vocabulary;

/// Feed every corpus text through the tokenizer into `vocab`, in order.
/// Returns the total number of tokens processed (not the number of distinct
/// tokens; read that off the vocabulary).
pub fn train<I, S>(tokenizer: &WordTokenizer, vocab: &mut Vocabulary, corpora: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0;
    for text in corpora {
        let tokens = tokenizer.tokenize(text.as_ref());
        total += tokens.len();
        vocab.add_tokens(tokens);
    }
    total
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn training_accumulates_one_shared_vocabulary() {
        let tokenizer = WordTokenizer::new();
        let mut vocab = Vocabulary::new();
        let total = train(
            &tokenizer,
            &mut vocab,
            ["the cat sat", "the cat ran away"],
        );
        assert_eq!(total, 7);
        // the, cat, sat, ran, away + the two reserved tokens
        assert_eq!(vocab.len(), 7);
        assert_eq!(vocab.token_id("the"), 2);
        assert_eq!(vocab.token_id("ran"), 5);
    }

    #[test]
    fn encode_then_decode_on_trained_text() {
        let tokenizer = WordTokenizer::new();
        let mut vocab = Vocabulary::new();
        train(&tokenizer, &mut vocab, ["the cat sat"]);

        let encoder = Encoder::new(&tokenizer, &vocab);
        let decoder = Decoder::new(&vocab);

        let ids = encoder.encode("the dog sat");
        assert_eq!(ids, vec![2, 1, 4]);
        assert_eq!(decoder.decode(&ids), "the <UNK> sat");
    }

    proptest! {
        // For text made purely of known lowercase words, decoding an
        // encoding reproduces the space-joined word sequence.
        #[test]
        fn round_trip_over_known_words(words in prop::collection::vec("[a-z]{1,8}", 1..20)) {
            let text = words.join(" ");

            let tokenizer = WordTokenizer::new();
            let mut vocab = Vocabulary::new();
            train(&tokenizer, &mut vocab, [text.as_str()]);

            let encoder = Encoder::new(&tokenizer, &vocab);
            let decoder = Decoder::new(&vocab);
            prop_assert_eq!(decoder.decode(&encoder.encode(&text)), text);
        }
    }
}
