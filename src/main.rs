use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use wordtok::{corpus, train, Decoder, Encoder, Vocabulary, WordTokenizer};

// Training corpus: (title, URL, cache filename).
const EBOOKS: [(&str, &str, &str); 3] = [
    (
        "Frankenstein",
        "https://www.gutenberg.org/cache/epub/84/pg84.txt",
        "frankenstein.txt",
    ),
    (
        "Pride and Prejudice",
        "https://www.gutenberg.org/cache/epub/1342/pg1342.txt",
        "pride_and_prejudice.txt",
    ),
    (
        "Alice's Adventures in Wonderland",
        "https://www.gutenberg.org/cache/epub/11/pg11.txt",
        "alice_in_wonderland.txt",
    ),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let tokenizer = WordTokenizer::new();
    let mut vocab = Vocabulary::new();

    println!("Building vocabulary from Project Gutenberg corpora...");
    let mut total_tokens = 0;
    for (title, url, filename) in EBOOKS {
        let raw = corpus::fetch_or_cache(url, filename)
            .with_context(|| format!("failed to acquire corpus '{title}'"))?;
        let clean = corpus::strip_gutenberg_boilerplate(&raw);
        let count = train(&tokenizer, &mut vocab, [clean]);
        info!("{title}: {count} tokens");
        total_tokens += count;
    }
    info!("total tokens processed: {total_tokens}");
    info!(
        "vocabulary size: {} tokens (including {} and {})",
        vocab.len(),
        Vocabulary::PAD_TOKEN,
        Vocabulary::UNK_TOKEN
    );

    // Vocabulary is read-only from here on.
    let encoder = Encoder::new(&tokenizer, &vocab);
    let decoder = Decoder::new(&vocab);
    run_menu(&encoder, &decoder)?;
    Ok(())
}

fn run_menu(encoder: &Encoder, decoder: &Decoder) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter your choice (1-3): ")? else {
            return goodbye();
        };

        match choice.as_str() {
            "1" => {
                if !handle_encode(&mut input, encoder)? {
                    return goodbye();
                }
            }
            "2" => {
                if !handle_decode(&mut input, decoder)? {
                    return goodbye();
                }
            }
            "3" | "q" | "quit" | "exit" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            _ => println!("\nInvalid choice. Please enter 1, 2, or 3.\n"),
        }
    }
}

fn print_menu() {
    println!("----------------------------------------");
    println!("  1. Encode text to token IDs");
    println!("  2. Decode token IDs to text");
    println!("  3. Exit");
    println!("----------------------------------------");
}

/// Returns `false` when stdin reached end-of-input.
fn handle_encode(input: &mut impl BufRead, encoder: &Encoder) -> io::Result<bool> {
    println!("\n=== ENCODE TEXT ===");
    let Some(text) = prompt(input, "Enter text to encode: ")? else {
        return Ok(false);
    };
    if text.is_empty() {
        println!("\nNo input provided.\n");
        return Ok(true);
    }

    println!("\n{}", encoder.encode_with_details(&text));
    println!(
        "Encoded IDs (copy for decoding): {}\n",
        encoder.encode_to_string(&text)
    );
    Ok(true)
}

/// Returns `false` when stdin reached end-of-input.
fn handle_decode(input: &mut impl BufRead, decoder: &Decoder) -> io::Result<bool> {
    println!("\n=== DECODE IDs ===");
    let Some(ids) = prompt(input, "Enter space-separated token IDs: ")? else {
        return Ok(false);
    };
    if ids.is_empty() {
        println!("\nNo input provided.\n");
        return Ok(true);
    }

    println!("\n{}\n", decoder.decode_with_details(&ids));
    Ok(true)
}

/// Print `message` and read one trimmed line; `None` means end-of-input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn goodbye() -> io::Result<()> {
    println!("\nInput stream closed. Goodbye!");
    Ok(())
}
