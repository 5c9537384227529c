// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Japanese-language predicate rules.
//!
//! "Japanese" means at least one character from the Hiragana, Katakana,
//! half-width Katakana or CJK Unified Ideographs blocks. This also accepts
//! Chinese text; it is a heuristic, not a language detector.

use crate::commit::ParsedCommit;
use crate::config::Polarity;

/// A rule whose outcome is computed by custom logic over the commit.
pub trait PredicateRule {
    /// Returns pass/fail and the fixed failure message.
    fn evaluate(&self, commit: &ParsedCommit, when: Polarity) -> (bool, &'static str);
}

/// Whether `c` falls in one of the Japanese script ranges.
pub fn is_japanese_char(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{309F}' // Hiragana
            | '\u{30A0}'..='\u{30FF}' // Katakana
            | '\u{FF66}'..='\u{FF9F}' // half-width Katakana
            | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
    )
}

/// Whether `text` contains at least one Japanese character.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

/// `subject-japanese`: the subject is written in Japanese.
#[derive(Debug, Clone, Copy)]
pub struct SubjectJapanese;

impl PredicateRule for SubjectJapanese {
    fn evaluate(&self, commit: &ParsedCommit, when: Polarity) -> (bool, &'static str) {
        (
            when.apply(contains_japanese(&commit.subject)),
            "subjectは日本語で記述してください",
        )
    }
}

/// `body-japanese`: the body is written in Japanese.
#[derive(Debug, Clone, Copy)]
pub struct BodyJapanese;

impl PredicateRule for BodyJapanese {
    fn evaluate(&self, commit: &ParsedCommit, when: Polarity) -> (bool, &'static str) {
        (
            when.apply(contains_japanese(commit.body.trim())),
            "bodyは日本語で記述してください",
        )
    }
}

/// `subject-full-stop-japanese`: the subject ends with the ideographic full stop.
#[derive(Debug, Clone, Copy)]
pub struct SubjectFullStopJapanese;

impl PredicateRule for SubjectFullStopJapanese {
    fn evaluate(&self, commit: &ParsedCommit, when: Polarity) -> (bool, &'static str) {
        (
            when.apply(commit.subject.ends_with('。')),
            "subjectは句点（。）で終わらないでください",
        )
    }
}
