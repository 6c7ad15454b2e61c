//! Word-based text helpers: counting, truncation and paragraph packing.

use std::borrow::Cow;

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate to the first `max_words` whitespace-delimited words.
///
/// Text that already fits is returned untouched, original whitespace
/// included; truncated text is rejoined with single spaces.
pub fn truncate_words(text: &str, max_words: usize) -> Cow<'_, str> {
    if word_count(text) <= max_words {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.split_whitespace()
                .take(max_words)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Split `text` into segments of consecutive blank-line paragraphs,
/// greedily packed up to `budget_words` words per segment.
///
/// Packing is purely length-based; a boundary can fall mid-topic. A
/// single paragraph larger than the budget becomes its own over-budget
/// segment. Paragraphs inside one segment are rejoined with single spaces.
pub fn split_into_segments(text: &str, budget_words: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_words = 0;

    for paragraph in text.split("\n\n") {
        let paragraph_words = word_count(paragraph);

        if current_words + paragraph_words <= budget_words {
            current.push(paragraph);
            current_words += paragraph_words;
        } else {
            if !current.is_empty() {
                segments.push(current.join(" "));
            }
            current = vec![paragraph];
            current_words = paragraph_words;
        }
    }

    if !current.is_empty() {
        segments.push(current.join(" "));
    }

    segments
}
