// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Digit grouping rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    separator: char,
    style: GroupingStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupingStyle {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Last group of three, then groups of two: `12,34,567`.
    Indian,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl NumberLocale {
    pub const ENGLISH: Self = Self { separator: ',', style: GroupingStyle::Thousands };

    /// Builds a locale from a POSIX/BCP-47 style tag (`de_DE.UTF-8`, `fr-CA`, `C`).
    ///
    /// Unknown languages fall back to English grouping.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        let separator = match (language.as_str(), region.as_str()) {
            ("de" | "it", "CH") | ("rm", _) => '\u{2019}',
            ("fr", _) => '\u{202f}',
            ("de" | "es" | "it" | "pt" | "nl" | "da" | "id" | "tr" | "el" | "ro" | "sl" | "hr"
            | "sr" | "vi", _) => '.',
            ("ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no" | "hu"
            | "bg" | "lt" | "lv" | "et", _) => '\u{a0}',
            _ => ',',
        };

        let style = if region == "IN" || matches!(language.as_str(), "hi" | "bn" | "mr" | "ta")
        {
            GroupingStyle::Indian
        } else {
            GroupingStyle::Thousands
        };

        Self { separator, style }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Formats `value` with this locale's digit grouping.
    pub fn group(&self, value: u64) -> String {
        let mut buffer = itoa::Buffer::new();
        let digits = buffer.format(value);

        let mut out = String::with_capacity(digits.len() + digits.len() / 2);
        let len = digits.len();
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && self.is_group_boundary(len - idx) {
                out.push(self.separator);
            }
            out.push(ch);
        }
        out
    }

    /// `remaining` is the number of digits from this position to the end.
    fn is_group_boundary(&self, remaining: usize) -> bool {
        match self.style {
            GroupingStyle::Thousands => remaining % 3 == 0,
            GroupingStyle::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }
}

/// Shorthand for [`NumberLocale::group`].
pub fn group_thousands(value: u64, locale: &NumberLocale) -> String {
    locale.group(value)
}

#[cfg(test)]
mod tests {
    use super::{group_thousands, NumberLocale};
    use rstest::rstest;

    #[rstest]
    #[case("en_US.UTF-8", 1234, "1,234")]
    #[case("en_US.UTF-8", 999, "999")]
    #[case("en_US.UTF-8", 0, "0")]
    #[case("en_US.UTF-8", 1_234_567, "1,234,567")]
    #[case("de_DE.UTF-8", 1234, "1.234")]
    #[case("de-CH", 1_234_567, "1\u{2019}234\u{2019}567")]
    #[case("fr_FR", 1234, "1\u{202f}234")]
    #[case("ru_RU", 1_000_000, "1\u{a0}000\u{a0}000")]
    #[case("en_IN", 1_234_567, "12,34,567")]
    #[case("hi_IN", 123_456_789, "12,34,56,789")]
    #[case("C", 1234, "1,234")]
    #[case("", 1234, "1,234")]
    fn groups_digits_per_locale(#[case] tag: &str, #[case] value: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(value, &NumberLocale::from_tag(tag)), expected);
    }

    #[test]
    fn max_value_groups_cleanly() {
        assert_eq!(NumberLocale::ENGLISH.group(u64::MAX), "18,446,744,073,709,551,615");
    }
}
