// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap. Words longer than `width` are truncated with an ellipsis.
pub(crate) fn wrap_words(text: &str, width: usize) -> SmallVec<[String; 2]> {
    let mut lines = SmallVec::<[String; 2]>::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word = truncate_with_ellipsis(word, width);
        let word_len = text_len(&word);

        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{text_len, truncate_with_ellipsis, wrap_words};

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn truncate_with_ellipsis_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }

    #[test]
    fn wrap_words_breaks_on_width() {
        assert_eq!(wrap_words("Your busiest day was 2024-01-01.", 12).as_slice(), [
            "Your busiest",
            "day was",
            "2024-01-01."
        ]);
        assert_eq!(wrap_words("supercalifragilistic", 6).as_slice(), ["super…"]);
        assert!(wrap_words("   ", 10).is_empty());
        assert!(wrap_words("text", 0).is_empty());
    }
}
