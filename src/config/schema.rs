// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from jclint.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The main configuration structure for jclint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JclConfig {
    /// Per-rule overrides, keyed by rule name (e.g. `header-max-length`).
    pub rules: BTreeMap<String, RuleOverride>,

    /// Parser configuration.
    pub parser: ParserConfig,

    /// CI-specific behaviour.
    pub ci: CiConfig,
}

impl JclConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Override for a single rule. Unset fields keep the built-in policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverride {
    /// Enforcement level.
    pub level: Option<Severity>,

    /// Rule polarity.
    pub when: Option<Polarity>,

    /// Rule parameter.
    pub value: Option<RuleValue>,
}

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines starting with this character are dropped before parsing.
    pub comment_char: Option<char>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_char: Some('#'),
        }
    }
}

/// CI-specific rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CiConfig {
    /// Whether warnings fail the lint like errors do.
    pub fail_on_warning: bool,
}

/// Enforcement level of a rule.
///
/// Accepts the names below or commitlint's numeric levels `0`, `1`, `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "SeverityRepr")]
pub enum Severity {
    /// Rule is declared but never reported.
    Disabled,
    /// Reported, does not affect validity.
    Warning,
    /// Reported, makes the message invalid.
    Error,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = String;

    fn try_from(repr: SeverityRepr) -> Result<Self, String> {
        match repr {
            SeverityRepr::Level(0) => Ok(Severity::Disabled),
            SeverityRepr::Level(1) => Ok(Severity::Warning),
            SeverityRepr::Level(2) => Ok(Severity::Error),
            SeverityRepr::Level(n) => Err(format!("unknown level {} (expected 0, 1 or 2)", n)),
            SeverityRepr::Name(name) => name.parse(),
        }
    }
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" | "off" => Ok(Severity::Disabled),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!(
                "unknown level '{}' (expected disabled, warning or error)",
                other
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The `when` parameter of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// The rule's condition must hold.
    #[default]
    Always,
    /// The rule's condition must not hold.
    Never,
}

impl Polarity {
    /// Resolve a rule condition into pass/fail.
    pub fn apply(self, condition: bool) -> bool {
        match self {
            Polarity::Always => condition,
            Polarity::Never => !condition,
        }
    }

    /// Whether this polarity inverts the condition.
    pub fn is_negated(self) -> bool {
        self == Polarity::Never
    }

    /// Get the string representation of the polarity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Always => "always",
            Polarity::Never => "never",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rule parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// A length limit.
    Length(usize),
    /// A set of allowed values.
    List(Vec<String>),
    /// A case name or a character.
    Text(String),
}

impl RuleValue {
    pub fn as_length(&self) -> Option<usize> {
        match self {
            RuleValue::Length(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Length(n) => write!(f, "{}", n),
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
            RuleValue::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// Commit type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Build,
    Chore,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Build => "Build system or deps changes",
            CommitType::Chore => "Other changes that don't modify src or test",
            CommitType::Ci => "CI config/script changes",
            CommitType::Docs => "Documentation only changes",
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Perf => "Performance improvements",
            CommitType::Refactor => "Code refactor",
            CommitType::Revert => "Reverts a previous commit",
            CommitType::Style => "Non-meaningful code changes",
            CommitType::Test => "Add or correct tests",
        }
    }

    /// Changelog section title.
    pub fn title(&self) -> &'static str {
        match self {
            CommitType::Build => "Builds",
            CommitType::Chore => "Chores",
            CommitType::Ci => "Continuous Integrations",
            CommitType::Docs => "Documentation",
            CommitType::Feat => "Features",
            CommitType::Fix => "Bug Fixes",
            CommitType::Perf => "Performance Improvements",
            CommitType::Refactor => "Code Refactoring",
            CommitType::Revert => "Reverts",
            CommitType::Style => "Styles",
            CommitType::Test => "Tests",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            CommitType::Build => "🛠",
            CommitType::Chore => "♻️",
            CommitType::Ci => "⚙️",
            CommitType::Docs => "📚",
            CommitType::Feat => "✨",
            CommitType::Fix => "🐛",
            CommitType::Perf => "🚀",
            CommitType::Refactor => "📦",
            CommitType::Revert => "🗑",
            CommitType::Style => "💎",
            CommitType::Test => "🚨",
        }
    }

    /// Get all commit types, in alphabetical order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Build,
            CommitType::Chore,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Revert,
            CommitType::Style,
            CommitType::Test,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
