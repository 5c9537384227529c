// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The policy is an ordered table of [`RuleSpec`]s. Each rule is a pure
//! predicate over a [`ParsedCommit`](crate::commit::ParsedCommit); the
//! engine collects every failure into a [`Verdict`].

mod builtin;
mod engine;
mod japanese;
mod table;
mod verdict;

pub use builtin::KNOWN_CASES;
pub use engine::RuleEngine;
pub use japanese::{
    contains_japanese, is_japanese_char, BodyJapanese, PredicateRule, SubjectFullStopJapanese,
    SubjectJapanese,
};
pub use table::{default_rules, resolve_rules, RuleName, RuleSpec, ValueKind, DEFAULT_MAX_LENGTH};
pub use verdict::{RuleOutcome, Verdict};
