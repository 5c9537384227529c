// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each rule computes a condition and passes when the condition matches the
//! configured [`Polarity`]. Rules over an absent field pass, so that only the
//! matching `*-empty` rule reports a missing type, subject or body.

use crate::commit::ParsedCommit;
use crate::config::{Polarity, RuleValue};

use super::table::DEFAULT_MAX_LENGTH;

/// Case names understood by `type-case` and `subject-case`.
pub const KNOWN_CASES: &[&str] = &["lower-case", "upper-case", "sentence-case"];

type Outcome = (bool, String);

/// Whether `case` is a supported case name.
pub fn is_known_case(case: &str) -> bool {
    KNOWN_CASES.contains(&case)
}

fn matches_case(text: &str, case: &str) -> bool {
    match case {
        "lower-case" => text.to_lowercase() == text,
        "upper-case" => text.to_uppercase() == text,
        "sentence-case" => {
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => {
                    let expected: String =
                        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect();
                    expected == text
                }
                None => true,
            }
        }
        other => {
            tracing::warn!(case = other, "unknown case name, rule skipped");
            true
        }
    }
}

fn must(when: Polarity) -> &'static str {
    if when.is_negated() {
        "must not"
    } else {
        "must"
    }
}

fn empty_rule(field: &str, value: &str, when: Polarity) -> Outcome {
    let message = if when.is_negated() {
        format!("{} may not be empty", field)
    } else {
        format!("{} must be empty", field)
    };
    (when.apply(value.is_empty()), message)
}

fn max_length(value: Option<&RuleValue>) -> usize {
    value
        .and_then(RuleValue::as_length)
        .unwrap_or(DEFAULT_MAX_LENGTH)
}

fn lines_within(text: &str, max: usize) -> bool {
    text.split('\n').all(|line| line.chars().count() <= max)
}

/// `type-enum`: the type is one of the allowed values.
pub fn type_enum(commit: &ParsedCommit, when: Polarity, value: Option<&RuleValue>) -> Outcome {
    let allowed = value.and_then(RuleValue::as_list).unwrap_or_default();
    let message = format!("type {} be one of [{}]", must(when), allowed.join(", "));

    if commit.commit_type.is_empty() {
        return (true, message);
    }

    let listed = allowed.iter().any(|t| *t == commit.commit_type);
    (when.apply(listed), message)
}

/// `type-empty`
pub fn type_empty(commit: &ParsedCommit, when: Polarity) -> Outcome {
    empty_rule("type", &commit.commit_type, when)
}

/// `type-case`: the type is written in the configured case.
pub fn type_case(commit: &ParsedCommit, when: Polarity, value: Option<&RuleValue>) -> Outcome {
    let case = value.and_then(RuleValue::as_text).unwrap_or("lower-case");
    let message = format!("type {} be {}", must(when), case);

    if commit.commit_type.is_empty() {
        return (true, message);
    }

    (when.apply(matches_case(&commit.commit_type, case)), message)
}

/// `scope-empty`
pub fn scope_empty(commit: &ParsedCommit, when: Polarity) -> Outcome {
    empty_rule("scope", &commit.scope, when)
}

/// `subject-empty`
pub fn subject_empty(commit: &ParsedCommit, when: Polarity) -> Outcome {
    empty_rule("subject", &commit.subject, when)
}

/// `subject-case`: the subject is written in the configured case.
pub fn subject_case(commit: &ParsedCommit, when: Polarity, value: Option<&RuleValue>) -> Outcome {
    let case = value.and_then(RuleValue::as_text).unwrap_or("lower-case");
    let message = format!("subject {} be {}", must(when), case);

    if commit.subject.is_empty() {
        return (true, message);
    }

    (when.apply(matches_case(&commit.subject, case)), message)
}

/// `subject-full-stop`: the subject ends with the configured character.
pub fn subject_full_stop(
    commit: &ParsedCommit,
    when: Polarity,
    value: Option<&RuleValue>,
) -> Outcome {
    let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
    let message = if when.is_negated() {
        "subject may not end with full stop".to_string()
    } else {
        "subject must end with full stop".to_string()
    };

    if commit.subject.is_empty() {
        return (true, message);
    }

    (when.apply(commit.subject.ends_with(stop)), message)
}

/// `header-max-length`. Counts characters, not bytes.
pub fn header_max_length(commit: &ParsedCommit, value: Option<&RuleValue>) -> Outcome {
    let max = max_length(value);
    let len = commit.header.chars().count();

    (
        len <= max,
        format!(
            "header must not be longer than {} characters, current length is {}",
            max, len
        ),
    )
}

/// `header-trim`
pub fn header_trim(commit: &ParsedCommit) -> Outcome {
    let header = commit.header.as_str();
    let leading = header.len() != header.trim_start().len();
    let trailing = header.len() != header.trim_end().len();

    let message = match (leading, trailing) {
        (true, true) => "header must not be surrounded by whitespace",
        (true, false) => "header must not start with whitespace",
        (false, true) => "header must not end with whitespace",
        (false, false) => "header must not be surrounded by whitespace",
    };

    (!leading && !trailing, message.to_string())
}

/// `body-leading-blank`: a blank line separates header and body.
pub fn body_leading_blank(commit: &ParsedCommit, when: Polarity) -> Outcome {
    let message = if when.is_negated() {
        "body may not have leading blank line".to_string()
    } else {
        "body must have leading blank line".to_string()
    };

    if commit.body.is_empty() {
        return (true, message);
    }

    let blank = commit
        .raw_lines()
        .nth(1)
        .map_or(false, |line| line.trim().is_empty());
    (when.apply(blank), message)
}

/// `body-empty`
pub fn body_empty(commit: &ParsedCommit, when: Polarity) -> Outcome {
    empty_rule("body", commit.body.trim(), when)
}

/// `body-max-line-length`
pub fn body_max_line_length(commit: &ParsedCommit, value: Option<&RuleValue>) -> Outcome {
    let max = max_length(value);
    let message = format!("body's lines must not be longer than {} characters", max);

    if commit.body.is_empty() {
        return (true, message);
    }

    (lines_within(&commit.body, max), message)
}

/// `footer-leading-blank`: a blank line separates body and footer.
pub fn footer_leading_blank(commit: &ParsedCommit, when: Polarity) -> Outcome {
    let message = if when.is_negated() {
        "footer may not have leading blank line".to_string()
    } else {
        "footer must have leading blank line".to_string()
    };

    let Some(first) = commit.footer.split('\n').next().filter(|l| !l.is_empty()) else {
        return (true, message);
    };

    let raw: Vec<&str> = commit.raw_lines().collect();
    let blank = raw
        .iter()
        .position(|line| *line == first)
        .filter(|&pos| pos > 0)
        .map_or(false, |pos| raw[pos - 1].trim().is_empty());

    (when.apply(blank), message)
}

/// `footer-max-line-length`
pub fn footer_max_line_length(commit: &ParsedCommit, value: Option<&RuleValue>) -> Outcome {
    let max = max_length(value);
    let message = format!("footer's lines must not be longer than {} characters", max);

    if commit.footer.is_empty() {
        return (true, message);
    }

    (lines_within(&commit.footer, max), message)
}
