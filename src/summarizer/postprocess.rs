//! Style post-processing applied to raw model output.

/// Marker words whose presence already reads as academic prose.
const ACADEMIC_MARKERS: &[&str] = &["research", "study", "analysis", "therefore", "consequently"];

/// Prepend `prefix` unless the summary already starts with it.
pub fn apply_prefix(summary: String, prefix: &str) -> String {
    if prefix.is_empty() || summary.starts_with(prefix) {
        summary
    } else {
        format!("{prefix}{summary}")
    }
}

/// Reformat a prose summary as a bulleted list.
///
/// Output that already carries a bullet marker is trusted as-is, as is
/// anything without at least two sentences to split on.
pub fn format_as_bullets(text: &str) -> String {
    if text.contains("\u{2022} ") {
        return text.to_string();
    }

    let mut sentences: Vec<&str> = text.split(". ").collect();
    if sentences.len() <= 1 {
        return text.to_string();
    }

    // The generation prefix may have survived as a leading sentence.
    if sentences[0].starts_with("Key points:") {
        sentences.remove(0);
    }

    let mut bullets = String::from("Key points:\n");
    for sentence in sentences {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        bullets.push_str("\u{2022} ");
        bullets.push_str(sentence);
        if !sentence.ends_with('.') {
            bullets.push('.');
        }
        bullets.push('\n');
    }

    bullets.trim_end().to_string()
}

/// Splice ", therefore" in front of the final period when none of the
/// academic marker words appear. Best-effort text surgery, not a quality
/// guarantee.
pub fn inject_academic_tone(summary: String) -> String {
    let lowered = summary.to_lowercase();
    if ACADEMIC_MARKERS.iter().any(|word| lowered.contains(word)) {
        return summary;
    }

    match summary.rfind('.') {
        Some(last_period) => {
            let mut patched = summary;
            patched.insert_str(last_period, ", therefore");
            patched
        }
        None => summary,
    }
}
