use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

// Downloaded books are cached here so later runs start offline.
const DATA_DIR: &str = "data";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the text behind `url`, reading `data/<filename>` when it already
/// exists and downloading (then persisting) it otherwise. Any I/O or HTTP
/// failure aborts the caller; there is no retry.
pub fn fetch_or_cache(url: &str, filename: &str) -> Result<String> {
    let dir = Path::new(DATA_DIR);
    let path = dir.join(filename);

    if path.exists() {
        info!("cache hit, loading {}", path.display());
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read cached file {}", path.display()));
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create cache directory {DATA_DIR}"))?;

    info!("downloading {url}");
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;
    let text = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("request to {url} failed"))?
        .text()
        .with_context(|| format!("failed to read response body from {url}"))?;

    fs::write(&path, &text)
        .with_context(|| format!("failed to persist {}", path.display()))?;
    info!("saved {}", path.display());

    Ok(text)
}

const START_MARKERS: [&str; 2] = [
    "*** START OF THE PROJECT GUTENBERG EBOOK",
    "*** START OF THIS PROJECT GUTENBERG EBOOK",
];

const END_MARKERS: [&str; 2] = [
    "*** END OF THE PROJECT GUTENBERG EBOOK",
    "*** END OF THIS PROJECT GUTENBERG EBOOK",
];

/// Cuts the Project Gutenberg license header and footer off `text`.
///
/// The story starts on the line after the start marker and ends right
/// before the end marker. A missing marker degrades to the corresponding
/// end of the text, so unmarked input passes through trimmed.
pub fn strip_gutenberg_boilerplate(text: &str) -> &str {
    let start = START_MARKERS
        .iter()
        .find_map(|marker| text.find(marker))
        .map(|idx| {
            text[idx..]
                .find('\n')
                .map_or(text.len(), |offset| idx + offset + 1)
        })
        .unwrap_or(0);

    let end = END_MARKERS
        .iter()
        .find_map(|marker| text.find(marker))
        .unwrap_or(text.len())
        .max(start);

    text[start..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_header_and_footer() {
        let raw = "License preamble\n\
                   *** START OF THE PROJECT GUTENBERG EBOOK FRANKENSTEIN ***\n\
                   It was a dreary night.\n\
                   *** END OF THE PROJECT GUTENBERG EBOOK FRANKENSTEIN ***\n\
                   License postamble";
        assert_eq!(strip_gutenberg_boilerplate(raw), "It was a dreary night.");
    }

    #[test]
    fn accepts_the_this_marker_variant() {
        let raw = "*** START OF THIS PROJECT GUTENBERG EBOOK ALICE ***\n\
                   Down the rabbit hole.\n\
                   *** END OF THIS PROJECT GUTENBERG EBOOK ALICE ***";
        assert_eq!(strip_gutenberg_boilerplate(raw), "Down the rabbit hole.");
    }

    #[test]
    fn unmarked_text_passes_through_trimmed() {
        assert_eq!(strip_gutenberg_boilerplate("  plain text  "), "plain text");
    }

    #[test]
    fn missing_end_marker_reads_to_the_end() {
        let raw = "*** START OF THE PROJECT GUTENBERG EBOOK X ***\nstory goes on";
        assert_eq!(strip_gutenberg_boilerplate(raw), "story goes on");
    }

    #[test]
    fn end_marker_before_start_marker_yields_nothing() {
        let raw = "*** END OF THE PROJECT GUTENBERG EBOOK X ***\n\
                   *** START OF THE PROJECT GUTENBERG EBOOK X ***\nleft over";
        assert_eq!(strip_gutenberg_boilerplate(raw), "");
    }
}
